use serde::Serialize;

/// The rendered goal list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GoalListView {
    /// No goals yet; a single card with a hint.
    Empty { message: String },
    Goals { cards: Vec<GoalCardView> },
}

impl GoalListView {
    pub fn cards(&self) -> &[GoalCardView] {
        match self {
            GoalListView::Empty { .. } => &[],
            GoalListView::Goals { cards } => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GoalListView::Empty { .. })
    }
}

/// One goal card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalCardView {
    pub goal_id: String,
    /// Name, with a marker when completed
    pub title: String,
    pub thumbnail: Thumbnail,
    /// e.g. `￥20,000 / ￥50,000（40%）`
    pub amount_label: String,
    /// 0..=100
    pub percent: u8,
    /// CSS width of the progress bar fill, e.g. `40%`
    pub progress_width: String,
    pub history_summary: String,
    pub quick_add_amounts: Vec<u64>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Thumbnail {
    Image { src: String, alt: String },
    Placeholder { glyph: String },
}
