use crate::enumeration;

enumeration! {
    /// Direction of a note.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum NoteType {
        /// Money in.
        Credit,
        /// Money out.
        Debit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::Enumeration;

    #[test]
    fn test_member_table() {
        assert_eq!(NoteType::from_name("Credit"), Some(NoteType::Credit));
        assert_eq!(NoteType::from_name("Debit"), Some(NoteType::Debit));
        assert_eq!(NoteType::from_name("Loan"), None);
        assert_eq!(NoteType::TYPE_NAME, "NoteType");
        assert_eq!(NoteType::Debit.to_string(), "Debit");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_by_member_name() {
        let json = serde_json::to_string(&NoteType::Credit).unwrap();
        assert_eq!(json, r#""Credit""#);
        assert_eq!(
            serde_json::from_str::<NoteType>(r#""Debit""#).unwrap(),
            NoteType::Debit
        );
    }
}
