//! Request path classification
//!
//! Empty segments are discarded before counting, so leading, trailing and
//! repeated separators are all equivalent: `""`, `"/"` and `"//"` are the
//! root, `"/20220717/"` and `"20220717"` are the same day.

use crate::constants::PATH_SEPARATOR;

/// Query shape of a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestShape {
    /// No segments: list day directories
    Root,
    /// One segment: list record files of a day
    Day { day: String },
    /// Two segments: parse one record file
    Record { day: String, file: String },
    /// Three or more segments
    Invalid,
}

impl RequestShape {
    /// Segments carried by the shape, in path order
    pub fn params(&self) -> Vec<&str> {
        match self {
            RequestShape::Root | RequestShape::Invalid => Vec::new(),
            RequestShape::Day { day } => vec![day],
            RequestShape::Record { day, file } => vec![day, file],
        }
    }

    /// `day/file` for a record request
    pub fn record_path(&self) -> Option<String> {
        match self {
            RequestShape::Record { day, file } => Some(join_segments(day, file)),
            _ => None,
        }
    }
}

/// Join path segments back together with the separator
pub fn join_segments(day: &str, file: &str) -> String {
    format!("{}{}{}", day, PATH_SEPARATOR, file)
}

/// Map a path onto its request shape; every input has exactly one shape
pub fn classify(path: &str) -> RequestShape {
    let mut segments = path.split(PATH_SEPARATOR).filter(|s| !s.is_empty());

    match (segments.next(), segments.next(), segments.next()) {
        (None, _, _) => RequestShape::Root,
        (Some(day), None, _) => RequestShape::Day {
            day: day.to_string(),
        },
        (Some(day), Some(file), None) => RequestShape::Record {
            day: day.to_string(),
            file: file.to_string(),
        },
        (Some(_), Some(_), Some(_)) => RequestShape::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_paths() {
        for path in ["", "/", "//", "///"] {
            assert_eq!(classify(path), RequestShape::Root, "path '{}'", path);
        }
    }

    #[test]
    fn test_day_paths() {
        for path in ["/20220717/", "/20220717", "20220717", "//20220717//"] {
            assert_eq!(
                classify(path),
                RequestShape::Day {
                    day: "20220717".to_string()
                },
                "path '{}'",
                path
            );
        }
    }

    #[test]
    fn test_record_paths() {
        let shape = classify("/20220717/090000.payments");
        assert_eq!(
            shape,
            RequestShape::Record {
                day: "20220717".to_string(),
                file: "090000.payments".to_string(),
            }
        );
        assert_eq!(shape.params(), vec!["20220717", "090000.payments"]);
        assert_eq!(
            shape.record_path(),
            Some("20220717/090000.payments".to_string())
        );

        assert_eq!(classify("20220717//090000.payments/"), shape);
    }

    #[test]
    fn test_invalid_paths() {
        for path in ["/a/b/c", "a/b/c/", "/a//b//c//d"] {
            assert_eq!(classify(path), RequestShape::Invalid, "path '{}'", path);
        }
    }

    #[test]
    fn test_params_by_shape() {
        assert!(RequestShape::Root.params().is_empty());
        assert!(RequestShape::Invalid.params().is_empty());
        assert_eq!(classify("/x").params(), vec!["x"]);
        assert_eq!(classify("/x").record_path(), None);
    }

    #[test]
    fn test_segments_are_not_interpreted() {
        // Dot segments and junk are passed through untouched
        assert_eq!(
            classify("/../etc"),
            RequestShape::Record {
                day: "..".to_string(),
                file: "etc".to_string(),
            }
        );
        assert_eq!(
            classify(" "),
            RequestShape::Day {
                day: " ".to_string()
            }
        );
    }
}
