pub mod ace;
pub mod btq;
pub mod cd_risc10;
pub mod ctsq;
pub mod gad7;
pub mod iesr;
pub mod lec5;
pub mod pc_ptsd5;
pub mod pcl5;
pub mod phq9;
pub mod tsq;

use crate::scoring::{Item, ResponseScale, ScalePoint};

pub(crate) static YES_NO_SCALE: ResponseScale = ResponseScale::YesNo;
pub(crate) static FREQUENCY_SCALE: ResponseScale = ResponseScale::Frequency;
pub(crate) static EXPOSURE_SCALE: ResponseScale = ResponseScale::Exposure;

/// Build an ordinal scale from consecutive labels starting at 0.
pub(crate) fn likert(labels: &[&str]) -> ResponseScale {
    ResponseScale::Ordinal(
        labels
            .iter()
            .enumerate()
            .map(|(value, label)| ScalePoint {
                value: value as u8,
                label: (*label).to_string(),
            })
            .collect(),
    )
}

pub(crate) fn item(position: usize, prompt: &str) -> Item {
    Item {
        position,
        prompt: prompt.to_string(),
        cluster: None,
        client_friendly: None,
    }
}

pub(crate) fn tagged_item(position: usize, prompt: &str, cluster: &str) -> Item {
    Item {
        position,
        prompt: prompt.to_string(),
        cluster: Some(cluster.to_string()),
        client_friendly: None,
    }
}
