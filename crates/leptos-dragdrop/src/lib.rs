//! Leptos DragDrop Utilities
//!
//! Column-based drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! A finished gesture is reported once as a `DragResult`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A droppable container and a position inside it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub droppable_id: String,
    pub index: usize,
}

/// Finished drag gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragResult {
    pub draggable_id: String,
    pub source: DropTarget,
    /// `None` when released outside every droppable
    pub destination: Option<DropTarget>,
}

/// Draggable that was pressed, and where it came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragOrigin {
    pub draggable_id: String,
    pub source: DropTarget,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragOrigin>>,
    pub dragging_write: WriteSignal<Option<DragOrigin>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pressed draggable (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragOrigin>>,
    pub pending_write: WriteSignal<Option<DragOrigin>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    /// Draggable currently being dragged, tracked
    pub fn dragging_id(&self) -> Option<String> {
        self.dragging_read.with(|d| d.as_ref().map(|d| d.draggable_id.clone()))
    }

    /// Whether `droppable_id` is the current hover target, tracked
    pub fn is_over(&self, droppable_id: &str) -> bool {
        self.drop_target_read
            .with(|t| t.as_ref().map_or(false, |t| t.droppable_id == droppable_id))
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragOrigin>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_read, pending_write) = signal(None::<DragOrigin>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Resolve the gesture from the pressed draggable and the hover target.
/// Returns `None` when no drag actually started (a plain click).
pub fn finish_drag(dragging: Option<DragOrigin>, target: Option<DropTarget>) -> Option<DragResult> {
    dragging.map(|origin| DragResult {
        draggable_id: origin.draggable_id,
        source: origin.source,
        destination: target,
    })
}

/// Clear every piece of gesture state
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for a draggable card
/// Records pending drag with start position
pub fn make_on_mousedown(
    dnd: DndSignals,
    draggable_id: String,
    source: DropTarget,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(DragOrigin {
                draggable_id: draggable_id.clone(),
                source: source.clone(),
            }));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Make `droppable_id` at `index` the hover target, if a drag is running
pub fn enter_target(dnd: &DndSignals, droppable_id: &str, index: usize) {
    if dnd.dragging_read.get_untracked().is_some() {
        dnd.drop_target_write.set(Some(DropTarget {
            droppable_id: droppable_id.to_string(),
            index,
        }));
    }
}

/// Create mouseenter handler for a droppable position (a card slot or a column tail)
pub fn make_on_target_mouseenter(
    dnd: DndSignals,
    droppable_id: String,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| enter_target(&dnd, &droppable_id, index)
}

/// Create mouseleave handler for a droppable container
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` runs for every started drag, with or without a destination.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragResult) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Only report real drags; a click fires naturally on the element
        if let Some(result) = finish_drag(dragging, drop_target) {
            on_drop(result);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
