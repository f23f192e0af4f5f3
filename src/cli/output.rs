use anyhow::Result;
use rolodex_tui::BrowseOutcome;
use serde_json::json;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Browse cancelled (query: '{}')", outcome.query);
        return;
    }

    if outcome.selected.is_empty() {
        println!("No characters selected");
        return;
    }

    for record in &outcome.selected {
        println!(
            "{}\t{}\t{}\t{}",
            record.id, record.name, record.status, record.species
        );
    }
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let selected: Vec<_> = outcome
        .selected
        .iter()
        .map(|record| {
            json!({
                "id": record.id,
                "name": record.name,
                "status": record.status,
                "species": record.species,
                "image": record.image,
            })
        })
        .collect();

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selected": selected,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use rolodex_core::Character;
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_format_includes_selected_records() {
        let outcome = BrowseOutcome {
            accepted: true,
            query: "rick".into(),
            selected: vec![Character {
                id: 1,
                name: "Rick Sanchez".into(),
                status: "Alive".into(),
                species: "Human".into(),
                image: "https://example.test/1.jpeg".into(),
            }],
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], true);
        assert_eq!(value["selected"][0]["name"], "Rick Sanchez");
        assert_eq!(value["selected"][0]["id"], 1);
    }

    #[test]
    fn json_format_handles_a_cancelled_session() {
        let outcome = BrowseOutcome {
            accepted: false,
            query: String::new(),
            selected: Vec::new(),
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], false);
        assert!(value["selected"].as_array().expect("array").is_empty());
    }
}
