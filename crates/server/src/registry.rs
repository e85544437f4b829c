//! In-memory school and bill registry.

use analysis::{Bill, SchoolProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registration payload for a school.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSchool {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
}

/// A registered school.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub id: u64,
    pub name: String,
    pub area: f64,
    pub students: u32,
    pub district: String,
    pub state: String,
    /// Combined score of the most recent bill. 0 before any bill.
    pub efficiency_score: f64,
}

impl SchoolRecord {
    pub fn profile(&self) -> SchoolProfile {
        SchoolProfile::new(self.students, self.area)
    }
}

/// Schools and their bill histories, kept in ascending period order.
#[derive(Debug, Default)]
pub struct Registry {
    schools: BTreeMap<u64, SchoolRecord>,
    bills: BTreeMap<u64, Vec<Bill>>,
    next_id: u64,
}

impl Registry {
    pub fn register(&mut self, school: NewSchool) -> SchoolRecord {
        self.next_id += 1;
        let record = SchoolRecord {
            id: self.next_id,
            name: school.name,
            area: school.area,
            students: school.students,
            district: school.district,
            state: school.state,
            efficiency_score: 0.0,
        };
        self.schools.insert(record.id, record.clone());
        record
    }

    pub fn schools(&self) -> impl Iterator<Item = &SchoolRecord> {
        self.schools.values()
    }

    pub fn school(&self, id: u64) -> Option<&SchoolRecord> {
        self.schools.get(&id)
    }

    pub fn history(&self, id: u64) -> &[Bill] {
        self.bills.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Store a bill and overwrite the school's efficiency score.
    ///
    /// Returns `false` if the school is unknown.
    pub fn record_bill(&mut self, id: u64, bill: Bill, efficiency_score: f64) -> bool {
        let Some(school) = self.schools.get_mut(&id) else {
            return false;
        };
        school.efficiency_score = efficiency_score;

        let history = self.bills.entry(id).or_default();
        let at = history.partition_point(|b| b.period <= bill.period);
        history.insert(at, bill);
        true
    }
}
