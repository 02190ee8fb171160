use crate::draw::Award;
use crate::utils::serde::deserialize_truthy_falsy;
use lottery_lib::{Candidate, CandidateId, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the participants sheet.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CandidateRow {
    #[serde(alias = "Id", alias = "ID")]
    pub id: CandidateId,
    #[serde(alias = "tickets", alias = "Tickets", alias = "Weight")]
    pub weight: Weight,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Group")]
    pub group: String,
    #[serde(default, alias = "Excluded", deserialize_with = "deserialize_truthy_falsy")]
    pub excluded: bool,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Candidate::new(row.id, row.weight)
            .with_name(row.name)
            .with_group(row.group)
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct WinnerRecord {
    pub round: usize,
    pub category: String,
    pub id: CandidateId,
    pub name: String,
    pub group: String,
    pub weight: Weight,
}

impl From<&Award> for WinnerRecord {
    fn from(award: &Award) -> Self {
        Self {
            round: award.round,
            category: award.category.clone(),
            id: award.winner.id.clone(),
            name: award.winner.name.clone(),
            group: award.winner.group.clone(),
            weight: award.winner.weight,
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct OddsRecord {
    pub id: CandidateId,
    pub weight: Weight,
    pub probability: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::csv::{load_data_from_csv, load_data_from_reader};
    use std::path::PathBuf;

    #[test]
    fn rows_from_sheet() {
        let sheet = "\
ID,Name,Group,Tickets,Excluded,Notes
1,Alice,ops,3,,first
2,Bob,dev,0,x,
3,Carol,,5,0,late\n";
        let rows: Vec<CandidateRow> = load_data_from_reader::<_, _, b','>(sheet.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            CandidateRow {
                id: "2".into(),
                weight: 0,
                name: "Bob".into(),
                group: "dev".into(),
                excluded: true,
            }
        );
        assert!(!rows[0].excluded);
        assert!(!rows[2].excluded);
        assert_eq!(rows[2].group, "");
    }

    #[test]
    fn optional_columns_default() {
        let sheet = "id,weight\nzed,2\n";
        let rows: Vec<CandidateRow> = load_data_from_reader::<_, _, b','>(sheet.as_bytes()).unwrap();
        let candidate = Candidate::from(rows[0].clone());
        assert_eq!(candidate, Candidate::new("zed", 2));
    }

    #[test]
    fn load_testing_sheet() {
        let file_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/testing/candidates.csv");
        let rows: Vec<CandidateRow> = load_data_from_csv::<_, b','>(&file_path).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows.iter().filter(|row| row.excluded).count(), 1);
        assert_eq!(rows.iter().map(|row| row.weight).sum::<u64>(), 35);
    }
}
