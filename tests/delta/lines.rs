#[cfg(test)]
mod tests {
    use delta::attributes::Attributes;
    use delta::delta::Delta;
    use delta::document::Document;
    use delta::error::Error;

    #[test]
    fn lines_splits_on_newline_passes() {
        let mut doc = Delta::default();
        doc.insert("Hello\nWorld\n");

        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 2);
        let mut expected_a = Delta::default();
        expected_a.insert("Hello");
        assert_eq!(lines[0].0, expected_a);
        assert!(lines[0].1.is_empty());

        let mut expected_b = Delta::default();
        expected_b.insert("World");
        assert_eq!(lines[1].0, expected_b);
        assert!(lines[1].1.is_empty());
    }

    #[test]
    fn lines_without_trailing_newline_passes() {
        let mut doc = Delta::default();
        doc.insert("Hello\nWorld");

        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 2);

        let mut expected = Delta::default();
        expected.insert("World");
        assert_eq!(lines[1].0, expected);
    }

    #[test]
    fn lines_carries_newline_attributes_passes() {
        let mut header = Attributes::default();
        header.insert("header", 1);

        let mut doc = Delta::default();
        doc.insert("Title");
        doc.insert_attr("\n", header.clone());
        doc.insert("Body");

        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, header);
        assert!(lines[1].1.is_empty());
    }

    #[test]
    fn lines_assigns_embed_to_its_line_passes() {
        let mut doc = Delta::default();
        doc.insert("Hello");
        doc.insert(1);
        doc.insert("\nWorld");

        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0.len(), 2);
    }

    #[test]
    fn lines_empty_document_passes() {
        let doc = Delta::default();
        assert_eq!(doc.lines().unwrap().len(), 0);
    }

    #[test]
    fn lines_rejects_non_document_passes() {
        let mut change = Delta::default();
        change.retain(5);

        assert!(matches!(change.lines(), Err(Error::BadDocument)));
    }
}
