//! Compiles a [`SpeakerPredicate`] into a parameterised `WHERE` clause.
//!
//! Free text and location are matched with `instr` against the `*_folded`
//! columns, which hold `fold_case` of each field. The predicate already
//! carries folded needles, so the SQL result set equals what
//! `SpeakerPredicate::matches` accepts. Tags use `lower()`, which is enough
//! for the ASCII vocabularies.

use keynote_core::filter::{SearchField, SpeakerPredicate};

/// A `WHERE` body with its positional parameters (`?1`, `?2`, ...).
#[derive(Debug, Clone, Default)]
pub struct SqlFilter {
    pub clause: String,
    pub params: Vec<libsql::Value>,
}

impl SqlFilter {
    /// `"WHERE ..."`, or `""` when the filter is empty.
    #[must_use]
    pub fn where_sql(&self) -> String {
        if self.clause.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clause)
        }
    }

    fn bind(&mut self, value: impl Into<libsql::Value>) -> String {
        self.params.push(value.into());
        format!("?{}", self.params.len())
    }
}

/// Build the filter for `predicate` against the `speakers` table.
#[must_use]
pub fn compile_speaker_predicate(predicate: &SpeakerPredicate) -> SqlFilter {
    let mut filter = SqlFilter::default();
    let mut conditions: Vec<String> = Vec::new();

    if let Some(text) = &predicate.text {
        let slot = filter.bind(text.clone());
        let ors: Vec<String> = SearchField::ALL
            .iter()
            .map(|field| format!("instr({}, {slot}) > 0", field.folded_column()))
            .collect();
        conditions.push(format!("({})", ors.join(" OR ")));
    }

    for (column, wanted) in [
        ("expertise", &predicate.expertise_any),
        ("speaking_topics", &predicate.speaking_topics_any),
    ] {
        if wanted.is_empty() {
            continue;
        }
        let slots: Vec<String> = wanted
            .iter()
            .map(|tag| filter.bind(tag.to_ascii_lowercase()))
            .collect();
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM json_each(speakers.{column}) WHERE lower(json_each.value) IN ({}))",
            slots.join(", ")
        ));
    }

    if let Some(min) = predicate.fee.min {
        let slot = filter.bind(min);
        conditions.push(format!("fee >= {slot}"));
    }
    if let Some(max) = predicate.fee.max {
        let slot = filter.bind(max);
        conditions.push(format!("fee <= {slot}"));
    }

    if let Some(location) = &predicate.location {
        let slot = filter.bind(location.clone());
        conditions.push(format!("instr(location_folded, {slot}) > 0"));
    }

    filter.clause = conditions.join(" AND ");
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use keynote_core::filter::SpeakerFilterBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn match_all_compiles_to_nothing() {
        let filter = compile_speaker_predicate(&SpeakerPredicate::match_all());
        assert_eq!(filter.where_sql(), "");
        assert!(filter.params.is_empty());
    }

    #[test]
    fn search_binds_one_param_for_three_columns() {
        let predicate = SpeakerFilterBuilder::new().search("ai").build();
        let filter = compile_speaker_predicate(&predicate);
        assert_eq!(filter.params.len(), 1);
        assert_eq!(filter.clause.matches("?1").count(), 3);
        assert!(filter.clause.contains("instr(bio_folded, ?1) > 0"));
    }

    #[test]
    fn bucket_compiles_to_inclusive_range() {
        let predicate = SpeakerFilterBuilder::new().budget("10k-15k").build();
        let filter = compile_speaker_predicate(&predicate);
        assert_eq!(filter.clause, "fee >= ?1 AND fee <= ?2");
        assert_eq!(
            filter.params,
            vec![libsql::Value::Integer(10_000), libsql::Value::Integer(15_000)]
        );
    }

    #[test]
    fn open_bucket_has_no_upper_bound() {
        let predicate = SpeakerFilterBuilder::new().budget("25k+").build();
        let filter = compile_speaker_predicate(&predicate);
        assert_eq!(filter.clause, "fee >= ?1");
    }

    #[test]
    fn topic_uses_json_each_overlap() {
        let predicate = SpeakerFilterBuilder::new().topic("Leadership").build();
        let filter = compile_speaker_predicate(&predicate);
        assert!(filter.clause.starts_with("EXISTS (SELECT 1 FROM json_each(speakers.expertise)"));
        assert_eq!(filter.params, vec![libsql::Value::Text("leadership".into())]);
    }

    #[test]
    fn needles_bind_literally_and_folded() {
        let predicate = SpeakerFilterBuilder::new().search("50%_ÉLAN").location("Zürich").build();
        let filter = compile_speaker_predicate(&predicate);
        assert_eq!(
            filter.params,
            vec![
                libsql::Value::Text("50%_élan".into()),
                libsql::Value::Text("zürich".into()),
            ]
        );
        assert!(filter.clause.ends_with("instr(location_folded, ?2) > 0"));
    }
}
