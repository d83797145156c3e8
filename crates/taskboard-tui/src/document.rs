//! Headless model of what is on screen: three lane containers holding
//! card elements, plus each lane's hover mark and count badge.

use std::fmt;
use taskboard_domain::{Lane, TaskId};

/// Handle of a mounted card element, unique for the life of a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Interaction handlers a card element responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    DragStart,
    DeleteClick,
}

/// A rendered task card. `heading` and `body` hold the displayed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    pub task_id: TaskId,
    pub heading: String,
    pub body: String,
    pub draggable: bool,
    pub bindings: Vec<Binding>,
}

impl CardElement {
    pub fn handles(&self, binding: Binding) -> bool {
        self.bindings.contains(&binding)
    }
}

#[derive(Debug, Clone)]
pub struct LaneContainer {
    lane: Lane,
    cards: Vec<(ElementId, CardElement)>,
    hovered: bool,
    badge: usize,
}

impl LaneContainer {
    fn new(lane: Lane) -> Self {
        Self {
            lane,
            cards: Vec::new(),
            hovered: false,
            badge: 0,
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn cards(&self) -> impl Iterator<Item = (ElementId, &CardElement)> {
        self.cards.iter().map(|(id, card)| (*id, card))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Count shown on the lane header. Only updated by a count refresh.
    pub fn badge(&self) -> usize {
        self.badge
    }

    fn position(&self, element: ElementId) -> Option<usize> {
        self.cards.iter().position(|(id, _)| *id == element)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    lanes: [LaneContainer; 3],
    next_element: u64,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lanes: Lane::ALL.map(LaneContainer::new),
            next_element: 1,
        }
    }

    pub fn container(&self, lane: Lane) -> &LaneContainer {
        &self.lanes[lane.index()]
    }

    fn container_mut(&mut self, lane: Lane) -> &mut LaneContainer {
        &mut self.lanes[lane.index()]
    }

    /// Mount a card at the end of `lane`
    pub fn append(&mut self, lane: Lane, card: CardElement) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        self.container_mut(lane).cards.push((id, card));
        id
    }

    pub fn lane_of(&self, element: ElementId) -> Option<Lane> {
        self.lanes
            .iter()
            .find(|container| container.position(element).is_some())
            .map(|container| container.lane)
    }

    pub fn element(&self, element: ElementId) -> Option<&CardElement> {
        let lane = self.lane_of(element)?;
        let container = self.container(lane);
        container
            .position(element)
            .map(|index| &container.cards[index].1)
    }

    pub fn element_mut(&mut self, element: ElementId) -> Option<&mut CardElement> {
        let lane = self.lane_of(element)?;
        let container = self.container_mut(lane);
        let index = container.position(element)?;
        Some(&mut container.cards[index].1)
    }

    pub fn element_at(&self, lane: Lane, index: usize) -> Option<ElementId> {
        self.container(lane).cards.get(index).map(|(id, _)| *id)
    }

    pub fn index_of(&self, element: ElementId) -> Option<(Lane, usize)> {
        self.lanes.iter().find_map(|container| {
            container
                .position(element)
                .map(|index| (container.lane, index))
        })
    }

    pub fn find_task(&self, task_id: &TaskId) -> Option<ElementId> {
        self.lanes.iter().find_map(|container| {
            container
                .cards
                .iter()
                .find(|(_, card)| &card.task_id == task_id)
                .map(|(id, _)| *id)
        })
    }

    /// Unmount an element, returning it
    pub fn remove(&mut self, element: ElementId) -> Option<CardElement> {
        let lane = self.lane_of(element)?;
        let container = self.container_mut(lane);
        let index = container.position(element)?;
        Some(container.cards.remove(index).1)
    }

    /// Move an element to the end of `lane`, keeping its id
    pub fn reparent(&mut self, element: ElementId, lane: Lane) -> bool {
        let Some(from) = self.lane_of(element) else {
            return false;
        };
        let source = self.container_mut(from);
        let Some(index) = source.position(element) else {
            return false;
        };
        let entry = source.cards.remove(index);
        self.container_mut(lane).cards.push(entry);
        true
    }

    pub fn card_count(&self, lane: Lane) -> usize {
        self.container(lane).len()
    }

    pub fn set_hovered(&mut self, lane: Lane, hovered: bool) {
        self.container_mut(lane).hovered = hovered;
    }

    pub(crate) fn set_badge(&mut self, lane: Lane, count: usize) {
        self.container_mut(lane).badge = count;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
