//! The dataset: every record the run produced, in input order.

use serde::{Deserialize, Serialize};

use super::EphemerisRecord;

/// The aggregated output of a run.
///
/// `count` always equals the number of objects. Fields are private so the
/// only way to grow a dataset is [`Dataset::push`], and deserialization
/// rejects files where the two disagree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetFile")]
pub struct Dataset {
    count: usize,
    objects: Vec<EphemerisRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, keeping `count` in step.
    pub fn push(&mut self, record: EphemerisRecord) {
        self.objects.push(record);
        self.count = self.objects.len();
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn objects(&self) -> &[EphemerisRecord] {
        &self.objects
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Unchecked on-disk shape, validated into a [`Dataset`].
#[derive(Deserialize)]
struct DatasetFile {
    count: usize,
    objects: Vec<EphemerisRecord>,
}

impl TryFrom<DatasetFile> for Dataset {
    type Error = String;

    fn try_from(file: DatasetFile) -> Result<Self, Self::Error> {
        if file.count != file.objects.len() {
            return Err(format!(
                "dataset count is {} but it holds {} object(s)",
                file.count,
                file.objects.len()
            ));
        }
        Ok(Self {
            count: file.count,
            objects: file.objects,
        })
    }
}
