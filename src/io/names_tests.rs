#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::io::read_names;

    fn temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn test_read_names_takes_name_column() {
        let file = temp_csv("Id,Name,Type\n1,NGC 4889,G\n2,NGC 4874,G\n");
        let names = read_names(file.path()).unwrap();
        assert_eq!(names, vec!["NGC 4889", "NGC 4874"]);
    }

    #[test]
    fn test_read_names_trims_and_drops_empty_cells() {
        let file = temp_csv("Id,Name\n1, NGC 1 \n2,\n3,NGC 2\n");
        let names = read_names(file.path()).unwrap();
        assert_eq!(names, vec!["NGC 1", "NGC 2"]);
    }

    #[test]
    fn test_read_names_missing_column_is_an_error() {
        let file = temp_csv("Id,Object\n1,NGC 1\n");
        let err = read_names(file.path()).unwrap_err();
        assert!(err.to_string().contains("Name"));
    }
}
