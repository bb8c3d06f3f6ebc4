// tests/log_normalizer_test.rs

use std::fs;
use std::path::PathBuf;

use poslog_csv_render::data_input::column_mapping::resolve_columns;
use poslog_csv_render::data_input::log_parser::{parse_log_file, parse_number};
use poslog_csv_render::LogError;
use tempfile::TempDir;

fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write test log");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_output_parses() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "path_log_20250101_120000.csv",
            "t,elapsed,pos_x,pos_y,pos_z\n\
             12.500,0.000,1.000,2.000,3.000\n\
             13.000,0.500,1.500,2.000,3.500\n\
             13.500,1.000,2.000,2.500,4.000\n",
        );
        let series = parse_log_file(&path).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.elapsed, vec![0.0, 0.5, 1.0]);
        assert_eq!(series.x, vec![1.0, 1.5, 2.0]);
        assert_eq!(series.z, vec![3.0, 3.5, 4.0]);
        assert_eq!(series.y, Some(vec![Some(2.0), Some(2.0), Some(2.5)]));
        assert_eq!(series.time, Some(vec![Some(12.5), Some(13.0), Some(13.5)]));
    }

    #[test]
    fn test_sequences_have_equal_length() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "noisy.csv",
            "elapsed,x,y,z\n0,0,,0\n1,garbage,1,1\n2,2,2,2\n3,3,,\n4,4,x,4\n",
        );
        let series = parse_log_file(&path).unwrap();
        let len = series.len();
        assert!(len >= 2);
        assert_eq!(series.x.len(), len);
        assert_eq!(series.z.len(), len);
        assert_eq!(series.y.as_ref().map(Vec::len), Some(len));
        assert_eq!(series.elapsed, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let names = ["time", "pos_x", "pos_y", "pos_z"];
        let permuted = ["pos_z", "time", "pos_y", "pos_x"];

        let a = resolve_columns(&names).unwrap();
        let b = resolve_columns(&permuted).unwrap();
        assert_eq!(names[a.x], permuted[b.x]);
        assert_eq!(names[a.z], permuted[b.z]);
        assert_eq!(names[a.y.unwrap()], permuted[b.y.unwrap()]);
        assert_eq!(names[a.time.unwrap()], permuted[b.time.unwrap()]);

        let dir = TempDir::new().unwrap();
        let first = write_log(&dir, "a.csv", "time,pos_x,pos_y,pos_z\n1,2,3,4\n2,3,4,5\n");
        let second = write_log(&dir, "b.csv", "pos_z,time,pos_y,pos_x\n4,1,3,2\n5,2,4,3\n");
        assert_eq!(parse_log_file(&first).unwrap(), parse_log_file(&second).unwrap());
    }

    #[test]
    fn test_missing_position_columns_regardless_of_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "no_xz.csv",
            "elapsed,lat,lon,alt\n0,1,2,3\n1,1,2,3\n2,1,2,3\n",
        );
        assert!(matches!(parse_log_file(&path), Err(LogError::MissingColumns)));

        let header_only = write_log(&dir, "header_only.csv", "elapsed,pos_x,pos_y\n");
        assert!(matches!(parse_log_file(&header_only), Err(LogError::MissingColumns)));
    }

    #[test]
    fn test_missing_time_basis() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "no_time.csv", "pos_x,pos_y,pos_z\n0,0,0\n1,1,1\n");
        assert!(matches!(parse_log_file(&path), Err(LogError::MissingTimeBasis)));
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "empty.csv", "");
        assert!(matches!(parse_log_file(&path), Err(LogError::EmptyInput(_))));

        let bom_only = write_log(&dir, "bom.csv", "\u{feff}");
        assert!(matches!(parse_log_file(&bom_only), Err(LogError::EmptyInput(_))));
    }

    #[test]
    fn test_insufficient_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "short.csv", "elapsed,pos_x,pos_z\n0,1,1\n");
        assert!(matches!(
            parse_log_file(&path),
            Err(LogError::InsufficientData { valid_rows: 1 })
        ));
    }

    #[test]
    fn test_elevation_suppressed_when_unparseable() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "flat.csv",
            "elapsed,pos_x,pos_y,pos_z\n0,0,,0\n1,1,-,1\n2,2,n/a,2\n",
        );
        let series = parse_log_file(&path).unwrap();
        assert!(!series.has_elevation());
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_elapsed_derived_from_time() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "raw_time.csv", "timestamp,x,z\n100,0,0\n101,1,0\n103,2,0\n");
        let series = parse_log_file(&path).unwrap();
        assert_eq!(series.elapsed, vec![0.0, 1.0, 3.0]);
        assert_eq!(series.time, Some(vec![Some(100.0), Some(101.0), Some(103.0)]));
    }

    #[test]
    fn test_decimal_comma_and_point_agree() {
        assert_eq!(parse_number("3,14"), parse_number("3.14"));
        assert_eq!(parse_number("3,14"), Some(3.14));

        let dir = TempDir::new().unwrap();
        let comma = write_log(
            &dir,
            "comma.csv",
            "Elapsed;Position X;Position Y;Position Z\n0;1,5;0,25;-2,75\n0,5;2,5;0,5;-3\n",
        );
        let point = write_log(
            &dir,
            "point.csv",
            "Elapsed,Position X,Position Y,Position Z\n0,1.5,0.25,-2.75\n0.5,2.5,0.5,-3\n",
        );
        assert_eq!(parse_log_file(&comma).unwrap(), parse_log_file(&point).unwrap());
    }

    #[test]
    fn test_bom_prefixed_header() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "bom.csv", "\u{feff}elapsed,pos_x,pos_z\n0,0,0\n1,1,1\n");
        let series = parse_log_file(&path).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does_not_exist.csv");
        assert!(matches!(parse_log_file(&path), Err(LogError::Io { .. })));
    }
}

// tests/log_normalizer_test.rs
