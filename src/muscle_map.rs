use crate::models::MuscleGroup;
use crate::stats::StatusCounts;

#[cfg(test)]
#[path = "muscle_map_test.rs"]
mod muscle_map_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyView {
    #[default]
    Front,
    Back,
}

impl BodyView {
    pub fn label(self) -> &'static str {
        match self {
            BodyView::Front => "Front",
            BodyView::Back => "Back",
        }
    }
}

/// Which side of the body is shown and which muscle, if any, is selected.
/// The selection always refers to a muscle on the side being shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MuscleMap {
    view: BodyView,
    selected: Option<String>,
}

impl MuscleMap {
    pub fn view(&self) -> BodyView {
        self.view
    }

    pub fn muscles<'a>(&self, front: &'a [MuscleGroup], back: &'a [MuscleGroup]) -> &'a [MuscleGroup] {
        match self.view {
            BodyView::Front => front,
            BodyView::Back => back,
        }
    }

    /// Selects `id` when it exists on the current side. Returns whether it did.
    pub fn select(&mut self, id: &str, front: &[MuscleGroup], back: &[MuscleGroup]) -> bool {
        if self.muscles(front, back).iter().any(|m| m.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Shows the other side, dropping the selection unless that side has the same id.
    pub fn switch_view(&mut self, view: BodyView, front: &[MuscleGroup], back: &[MuscleGroup]) {
        self.view = view;
        let still_present = self
            .selected
            .as_deref()
            .is_some_and(|id| self.muscles(front, back).iter().any(|m| m.id == id));
        if !still_present {
            self.selected = None;
        }
    }

    pub fn reset(&mut self) {
        *self = MuscleMap::default();
    }

    pub fn selected<'a>(&self, front: &'a [MuscleGroup], back: &'a [MuscleGroup]) -> Option<&'a MuscleGroup> {
        let id = self.selected.as_deref()?;
        self.muscles(front, back).iter().find(|m| m.id == id)
    }

    pub fn counts(&self, front: &[MuscleGroup], back: &[MuscleGroup]) -> StatusCounts {
        StatusCounts::of(self.muscles(front, back))
    }
}
