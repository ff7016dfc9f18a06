use serde::Serialize;

use super::{Example, Location, Section};

/// Flattened view of one example and the section that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    pub display_name: String,
    pub code: String,
    pub expected_tree: String,
    pub location: Location,
}

impl TestRecord {
    pub fn from_example(
        section: &Section,
        example: &Example,
        file: Option<&std::path::Path>,
    ) -> Self {
        Self {
            display_name: display_name(&section.name, &example.name),
            code: example.source.clone(),
            expected_tree: example.tree.clone(),
            location: Location::new(file.map(|p| p.to_path_buf()), section.line, example.line),
        }
    }
}

/// Section name followed by example name. Empty names are skipped, and an example named after
/// its section only contributes once.
fn display_name(section: &str, example: &str) -> String {
    match (section.is_empty(), example.is_empty()) {
        (_, true) => section.to_string(),
        (true, false) => example.to_string(),
        (false, false) if section == example => section.to_string(),
        (false, false) => format!("{} {}", section, example),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_both_names() {
        assert_eq!(display_name("literals", "numbers"), "literals numbers");
        assert_eq!(display_name("literals", ""), "literals");
        assert_eq!(display_name("", "numbers"), "numbers");
        assert_eq!(display_name("", ""), "");
        assert_eq!(display_name("simple", "simple"), "simple");
    }

    #[test]
    fn record_copies_location_from_headers() {
        let mut section = Section::new("literals", 0, 3);
        section.examples.push(Example {
            name: "numbers".into(),
            source: "1;".into(),
            tree: "(program (number))".into(),
            line: 8,
        });
        let record = TestRecord::from_example(
            &section,
            &section.examples[0],
            Some(std::path::Path::new("lits.txt")),
        );
        assert_eq!(record.code, "1;");
        assert_eq!(record.expected_tree, "(program (number))");
        assert_eq!(record.location.section_line, 3);
        assert_eq!(record.location.example_line, 8);
        assert_eq!(record.location.to_string(), "lits.txt:8");
    }
}
