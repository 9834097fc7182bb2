//! The command API the UI layer calls into.

use crate::config::{BoardConfig, DragHistory};
use crate::error::BoardResult;
use crate::history::HistoryManager;
use crate::item::{FontStyle, ItemId, TextColor, TextItem};
use crate::store::{ItemStore, Snapshot};
use kurbo::Point;

/// An in-progress drag gesture.
#[derive(Debug, Clone, Copy)]
struct DragState {
    id: ItemId,
    /// Position of the item when the gesture started.
    start: Point,
}

/// Text annotation board: placed items plus their undo history.
///
/// Add and remove are undoable. Moves are applied directly; with
/// [`DragHistory::OnGestureEnd`] a whole drag gesture becomes one undo step.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    history: HistoryManager,
    drag: Option<DragState>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        let store = ItemStore::with_default_position(config.default_position);
        let history = HistoryManager::new(store).with_limit(config.history_limit);
        Self {
            config,
            history,
            drag: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Place a new text item. Fails with `InvalidInput` on empty content,
    /// in which case neither the items nor the history change.
    pub fn add_text(
        &mut self,
        content: &str,
        font_size: f64,
        font_style: FontStyle,
        color: TextColor,
    ) -> BoardResult<TextItem> {
        let result = self
            .history
            .try_record_and_apply(|store| store.add(content, font_size, font_style, color));
        match &result {
            Ok(item) => log::debug!("Added text item {} ({:?})", item.id(), item.content()),
            Err(e) => log::warn!("Rejected text item: {}", e),
        }
        result
    }

    /// Place a new text item using the configured default style.
    pub fn add_text_with_defaults(&mut self, content: &str) -> BoardResult<TextItem> {
        let style = self.config.default_style;
        self.add_text(content, style.font_size, style.font_style, style.color)
    }

    /// Move an item to canvas coordinates. Not recorded in history.
    /// Unknown ids and non-finite coordinates are ignored.
    pub fn move_text(&mut self, id: ItemId, x: f64, y: f64) {
        if self.history.store_mut().move_item(id, x, y) {
            log::trace!("Moved text item {} to ({}, {})", id, x, y);
        } else {
            log::trace!("Ignoring move of text item {} to ({}, {})", id, x, y);
        }
    }

    /// Remove an item. Unknown ids are ignored and leave history untouched.
    pub fn remove_text(&mut self, id: ItemId) {
        if !self.history.store().contains(id) {
            log::trace!("Ignoring removal of unknown text item {}", id);
            return;
        }
        self.history.record_and_apply(|store| store.remove(id));
        log::debug!("Removed text item {}", id);
    }

    /// Start dragging an item. Returns false if the item does not exist.
    ///
    /// A gesture that is still open is finished first.
    pub fn begin_drag(&mut self, id: ItemId) -> bool {
        self.end_drag();
        let Some(item) = self.history.store().get(id) else {
            return false;
        };
        self.drag = Some(DragState {
            id,
            start: item.position(),
        });
        true
    }

    /// Finish the current drag gesture.
    ///
    /// Under [`DragHistory::OnGestureEnd`] this records one undo step if the
    /// item ended up somewhere other than where it started.
    pub fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if self.config.drag_history != DragHistory::OnGestureEnd {
            return;
        }
        let Some(end) = self.history.store().get(drag.id).map(TextItem::position) else {
            return;
        };
        if end == drag.start {
            return;
        }

        // Put the item back where it started so the recorded state is the
        // pre-drag one, then re-apply the final position.
        self.history
            .store_mut()
            .move_item(drag.id, drag.start.x, drag.start.y);
        self.history
            .record_and_apply(|store| store.move_item(drag.id, end.x, end.y));
        log::debug!(
            "Recorded drag of text item {} from ({}, {}) to ({}, {})",
            drag.id,
            drag.start.x,
            drag.start.y,
            end.x,
            end.y
        );
    }

    /// Id of the item being dragged, if a gesture is open.
    pub fn dragging(&self) -> Option<ItemId> {
        self.drag.map(|drag| drag.id)
    }

    /// Undo the last change. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Redo the last undone change. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Items in render order (back to front).
    pub fn current_items(&self) -> &[TextItem] {
        self.history.store().items()
    }

    pub fn get(&self, id: ItemId) -> Option<&TextItem> {
        self.history.store().get(id)
    }

    /// An immutable copy of the current items.
    pub fn snapshot(&self) -> Snapshot {
        self.history.store().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn add(board: &mut Board, content: &str) -> ItemId {
        board.add_text_with_defaults(content).unwrap().id()
    }

    fn tracked_board() -> Board {
        Board::with_config(BoardConfig {
            drag_history: DragHistory::OnGestureEnd,
            ..BoardConfig::default()
        })
    }

    #[test]
    fn test_add_text_with_defaults() {
        let mut board = Board::new();
        let item = board.add_text_with_defaults("Hello").unwrap();

        assert_eq!(item.font_size(), 16.0);
        assert_eq!(item.font_style(), FontStyle::Normal);
        assert_eq!(item.color(), TextColor::black());
        assert_eq!(item.position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_configured_default_position() {
        let mut board = Board::with_config(BoardConfig {
            default_position: Point::new(10.0, 20.0),
            ..BoardConfig::default()
        });
        let item = board.add_text_with_defaults("x").unwrap();
        assert_eq!(item.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_empty_add_changes_nothing() {
        let mut board = Board::new();
        add(&mut board, "a");

        let result = board.add_text("", 16.0, FontStyle::Normal, TextColor::black());
        assert!(matches!(result, Err(BoardError::InvalidInput(_))));
        assert_eq!(board.current_items().len(), 1);
        assert_eq!(board.history().undo_depth(), 1);
    }

    #[test]
    fn test_move_is_not_undoable_by_default() {
        let mut board = Board::new();
        let id = add(&mut board, "a");

        board.begin_drag(id);
        board.move_text(id, 80.0, 90.0);
        board.move_text(id, 100.0, 120.0);
        board.end_drag();

        assert_eq!(board.history().undo_depth(), 1);
        assert_eq!(board.get(id).unwrap().position(), Point::new(100.0, 120.0));

        // Undo goes straight back past the add
        assert!(board.undo());
        assert!(board.current_items().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_keeps_history() {
        let mut board = Board::new();
        add(&mut board, "a");
        board.undo();
        let items = board.snapshot();

        board.remove_text(ItemId::new(999));

        assert_eq!(board.snapshot(), items);
        assert_eq!(board.history().undo_depth(), 0);
        assert_eq!(board.history().redo_depth(), 1);
    }

    #[test]
    fn test_remove_is_undoable() {
        let mut board = Board::new();
        let a = add(&mut board, "a");
        let b = add(&mut board, "b");

        board.remove_text(a);
        assert_eq!(board.current_items().len(), 1);
        assert_eq!(board.current_items()[0].id(), b);

        assert!(board.undo());
        let ids: Vec<_> = board.current_items().iter().map(TextItem::id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_tracked_drag_is_one_step() {
        let mut board = tracked_board();
        let id = add(&mut board, "a");

        assert!(board.begin_drag(id));
        assert_eq!(board.dragging(), Some(id));
        for step in 1..=10 {
            board.move_text(id, 50.0 + step as f64, 50.0);
        }
        board.end_drag();

        assert_eq!(board.dragging(), None);
        assert_eq!(board.history().undo_depth(), 2);
        assert_eq!(board.get(id).unwrap().position(), Point::new(60.0, 50.0));

        assert!(board.undo());
        assert_eq!(board.get(id).unwrap().position(), Point::new(50.0, 50.0));
        assert!(board.redo());
        assert_eq!(board.get(id).unwrap().position(), Point::new(60.0, 50.0));
    }

    #[test]
    fn test_tracked_drag_without_movement_records_nothing() {
        let mut board = tracked_board();
        let id = add(&mut board, "a");

        board.begin_drag(id);
        board.move_text(id, 70.0, 70.0);
        board.move_text(id, 50.0, 50.0);
        board.end_drag();

        assert_eq!(board.history().undo_depth(), 1);
    }

    #[test]
    fn test_tracked_drag_of_removed_item_records_nothing() {
        let mut board = tracked_board();
        let id = add(&mut board, "a");

        board.begin_drag(id);
        board.move_text(id, 70.0, 70.0);
        board.remove_text(id);
        board.end_drag();

        assert_eq!(board.history().undo_depth(), 2);
        assert!(board.current_items().is_empty());
    }

    #[test]
    fn test_tracked_drag_clears_redo() {
        let mut board = tracked_board();
        let a = add(&mut board, "a");
        add(&mut board, "b");
        board.undo();
        assert!(board.can_redo());

        board.begin_drag(a);
        board.move_text(a, 0.0, 0.0);
        board.end_drag();

        assert!(!board.can_redo());
    }

    #[test]
    fn test_begin_drag_unknown_item() {
        let mut board = tracked_board();
        assert!(!board.begin_drag(ItemId::new(7)));
        assert_eq!(board.dragging(), None);
    }

    #[test]
    fn test_begin_drag_finishes_open_gesture() {
        let mut board = tracked_board();
        let a = add(&mut board, "a");
        let b = add(&mut board, "b");

        board.begin_drag(a);
        board.move_text(a, 5.0, 5.0);
        board.begin_drag(b);

        assert_eq!(board.dragging(), Some(b));
        assert_eq!(board.history().undo_depth(), 3);
    }

    #[test]
    fn test_history_limit_from_config() {
        let mut board = Board::with_config(BoardConfig {
            history_limit: Some(1),
            ..BoardConfig::default()
        });
        add(&mut board, "a");
        add(&mut board, "b");

        assert!(board.undo());
        assert!(!board.undo());
        assert_eq!(board.current_items().len(), 1);
    }

    #[test]
    fn test_zero_history_limit_still_undoes() {
        let mut board = Board::with_config(BoardConfig {
            history_limit: Some(0),
            ..BoardConfig::default()
        });
        add(&mut board, "a");

        assert!(board.can_undo());
        assert!(board.undo());
        assert!(board.current_items().is_empty());
    }

    #[test]
    fn test_non_finite_move_keeps_round_trip() {
        let mut board = tracked_board();
        let id = add(&mut board, "a");
        let before = board.snapshot();

        board.begin_drag(id);
        board.move_text(id, f64::NAN, 10.0);
        board.end_drag();

        assert_eq!(board.snapshot(), before);
        assert_eq!(board.history().undo_depth(), 1);
        assert!(board.undo());
        assert!(board.redo());
        assert_eq!(board.snapshot(), before);
    }
}
