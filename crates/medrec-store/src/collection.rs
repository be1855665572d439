//! Append-only record arena with a uniqueness index.

use std::collections::BTreeMap;

use medrec_model::Record;

/// Records of one kind in insertion order, indexed by identifier.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
    index: BTreeMap<String, usize>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    /// Appends `record` unless its identifier is taken, in which case the
    /// record is handed back untouched.
    pub fn insert(&mut self, record: R) -> Result<(), R> {
        if self.index.contains_key(record.id()) {
            return Err(record);
        }
        self.index.insert(record.id().to_string(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::id)
    }
}

impl<'a, R: Record> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrec_model::{Doctor, Speciality};

    fn doctor(user_id: &str, name: &str) -> Doctor {
        Doctor {
            user_id: user_id.to_string(),
            doctor_name: name.to_string(),
            password: "secret1".to_string(),
            doctor_speciality: Speciality::General,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut doctors = Collection::new();
        doctors.insert(doctor("dr_b", "B")).unwrap();
        doctors.insert(doctor("dr_a", "A")).unwrap();
        let ids: Vec<&str> = doctors.ids().collect();
        assert_eq!(ids, vec!["dr_b", "dr_a"]);
        assert_eq!(doctors.get("dr_a").map(|d| d.doctor_name.as_str()), Some("A"));
    }

    #[test]
    fn rejects_taken_ids_and_returns_the_record() {
        let mut doctors = Collection::new();
        doctors.insert(doctor("dr_a", "A")).unwrap();
        let rejected = doctors.insert(doctor("dr_a", "Other")).unwrap_err();
        assert_eq!(rejected.doctor_name, "Other");
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors.get("dr_a").map(|d| d.doctor_name.as_str()), Some("A"));
    }
}
