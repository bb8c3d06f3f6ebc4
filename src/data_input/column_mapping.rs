// src/data_input/column_mapping.rs

use std::fmt;

use crate::error::LogError;

/// Logical measurement channel a header column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Time,
    Elapsed,
    X,
    Y,
    Z,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Time, Role::Elapsed, Role::X, Role::Y, Role::Z];

    pub fn name(self) -> &'static str {
        match self {
            Role::Time => "time",
            Role::Elapsed => "elapsed",
            Role::X => "x",
            Role::Y => "y",
            Role::Z => "z",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role to alias table. Aliases are compared against normalized header names
/// (see [`normalize_header_name`]) and must match in full.
pub type AliasTable<'a> = &'a [(Role, &'a [&'a str])];

pub static ROLE_ALIASES: &[(Role, &[&str])] = &[
    (Role::Time, &["t", "time", "timestamp"]),
    (Role::Elapsed, &["elapsed", "tiempo", "segundos"]),
    (Role::X, &["x", "posx", "positionx", "position.x", "worldx"]),
    (Role::Y, &["y", "posy", "positiony", "position.y", "worldy"]),
    (Role::Z, &["z", "posz", "positionz", "position.z", "worldz"]),
];

/// Trims, lowercases and strips spaces, underscores and hyphens.
/// `" Pos_X "` becomes `"posx"`, `"Position.X"` becomes `"position.x"`.
pub fn normalize_header_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .collect()
}

/// Index of the first header column (left to right) whose normalized name equals one of `aliases`.
pub fn find_column<S: AsRef<str>>(header: &[S], aliases: &[&str]) -> Option<usize> {
    header.iter().position(|h| {
        let normalized = normalize_header_name(h.as_ref());
        aliases.contains(&normalized.as_str())
    })
}

/// Resolved column positions for one log. `x` and `z` are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub time: Option<usize>,
    pub elapsed: Option<usize>,
    pub x: usize,
    pub y: Option<usize>,
    pub z: usize,
}

impl ColumnIndex {
    pub fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Time => self.time,
            Role::Elapsed => self.elapsed,
            Role::X => Some(self.x),
            Role::Y => self.y,
            Role::Z => Some(self.z),
        }
    }
}

/// Resolves every role against `header` using the built-in alias table.
pub fn resolve_columns<S: AsRef<str>>(header: &[S]) -> Result<ColumnIndex, LogError> {
    resolve_columns_with(header, ROLE_ALIASES)
}

/// Resolves every role against `header` using `table`.
///
/// Each role is searched independently, so two roles whose aliases match the
/// same header name both get that column's index.
///
/// # Errors
/// * `MissingColumns` if X or Z cannot be resolved.
/// * `MissingTimeBasis` if neither time nor elapsed can be resolved.
pub fn resolve_columns_with<S: AsRef<str>>(
    header: &[S],
    table: AliasTable<'_>,
) -> Result<ColumnIndex, LogError> {
    let lookup = |role: Role| -> Option<usize> {
        table
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, aliases)| find_column(header, aliases))
    };

    let time = lookup(Role::Time);
    let elapsed = lookup(Role::Elapsed);
    let (x, z) = match (lookup(Role::X), lookup(Role::Z)) {
        (Some(x), Some(z)) => (x, z),
        _ => return Err(LogError::MissingColumns),
    };
    if time.is_none() && elapsed.is_none() {
        return Err(LogError::MissingTimeBasis);
    }

    Ok(ColumnIndex {
        time,
        elapsed,
        x,
        y: lookup(Role::Y),
        z,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_name() {
        assert_eq!(normalize_header_name(" Pos_X "), "posx");
        assert_eq!(normalize_header_name("World-Z"), "worldz");
        assert_eq!(normalize_header_name("Position X"), "positionx");
        assert_eq!(normalize_header_name("Position.Y"), "position.y");
        assert_eq!(normalize_header_name("TIME STAMP"), "timestamp");
    }

    #[test]
    fn test_logger_header() {
        let header = ["t", "elapsed", "pos_x", "pos_y", "pos_z"];
        let idx = resolve_columns(&header).unwrap();
        assert_eq!(
            idx,
            ColumnIndex {
                time: Some(0),
                elapsed: Some(1),
                x: 2,
                y: Some(3),
                z: 4,
            }
        );
    }

    #[test]
    fn test_first_matching_column_wins() {
        let header = ["x", "pos_x", "z", "world_z", "tiempo"];
        let idx = resolve_columns(&header).unwrap();
        assert_eq!(idx.x, 0);
        assert_eq!(idx.z, 2);
        assert_eq!(idx.elapsed, Some(4));
        assert_eq!(idx.time, None);
        assert_eq!(idx.y, None);
    }

    #[test]
    fn test_alias_must_match_whole_name() {
        // "posx2" and "xpos" are not aliases of x
        let header = ["time", "posx2", "xpos", "z"];
        assert!(matches!(resolve_columns(&header), Err(LogError::MissingColumns)));
    }

    #[test]
    fn test_missing_time_basis() {
        let header = ["pos_x", "pos_y", "pos_z"];
        assert!(matches!(resolve_columns(&header), Err(LogError::MissingTimeBasis)));
    }

    #[test]
    fn test_missing_columns_takes_precedence() {
        let header = ["pos_x", "pos_y"];
        assert!(matches!(resolve_columns(&header), Err(LogError::MissingColumns)));
    }

    #[test]
    fn test_roles_can_share_a_column() {
        // Overlapping aliases are not disambiguated: both roles bind to the first match.
        let table: &[(Role, &[&str])] = &[
            (Role::Time, &["t"]),
            (Role::Elapsed, &["t", "elapsed"]),
            (Role::X, &["x"]),
            (Role::Y, &["y"]),
            (Role::Z, &["z"]),
        ];
        let idx = resolve_columns_with(&["t", "x", "z", "elapsed"], table).unwrap();
        assert_eq!(idx.time, Some(0));
        assert_eq!(idx.elapsed, Some(0));
    }

    #[test]
    fn test_get_by_role() {
        let idx = resolve_columns(&["elapsed", "x", "z"]).unwrap();
        assert_eq!(idx.get(Role::Elapsed), Some(0));
        assert_eq!(idx.get(Role::X), Some(1));
        assert_eq!(idx.get(Role::Z), Some(2));
        assert_eq!(idx.get(Role::Time), None);
        assert_eq!(idx.get(Role::Y), None);
    }
}

// src/data_input/column_mapping.rs
