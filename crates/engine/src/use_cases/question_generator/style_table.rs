//! Body part → cosmetic style table.
//!
//! The single source for which style family each creature part belongs to.
//! Questions cycle through it in order, and the fallback question uses it too.

use std::collections::BTreeMap;

use critterquiz_domain::{BodyPartStyle, BodyPartType};

pub const PART_STYLE_TABLE: [(BodyPartType, BodyPartStyle); 8] = [
    (BodyPartType::Eyes, BodyPartStyle::Round),
    (BodyPartType::Ears, BodyPartStyle::Square),
    (BodyPartType::Nose, BodyPartStyle::Triangle),
    (BodyPartType::Mouth, BodyPartStyle::Round),
    (BodyPartType::Arms, BodyPartStyle::Square),
    (BodyPartType::Legs, BodyPartStyle::Triangle),
    (BodyPartType::Tail, BodyPartStyle::Round),
    (BodyPartType::Wings, BodyPartStyle::Square),
];

pub fn part_style_mapping() -> BTreeMap<BodyPartType, BodyPartStyle> {
    PART_STYLE_TABLE.iter().copied().collect()
}

/// Body part assigned to the `index`-th question of a batch
pub fn body_part_for(index: usize) -> BodyPartType {
    PART_STYLE_TABLE[index % PART_STYLE_TABLE.len()].0
}

/// Style handed to the option at `position` in a question's shuffled options
pub fn style_for_option(position: usize) -> BodyPartStyle {
    let styles = BodyPartStyle::all();
    styles[position % styles.len()]
}
