use std::num::NonZeroUsize;
use std::rc::Rc;

use log::{debug, warn};
use yew::functional::Reducible;

use crate::error::ControllerError;

/// Index of the slide currently on screen. The index is always valid for
/// the slide count the carousel was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.len.get()
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    /// Resolves the current index against a slide table.
    pub fn current<'a, T>(&self, slides: &'a [T]) -> Option<&'a T> {
        slides.get(self.index)
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    pub fn retreat(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    /// Moves straight to `index`. Out of range targets leave the carousel
    /// where it is.
    pub fn jump_to(&mut self, index: usize) -> Result<(), ControllerError> {
        if index >= self.len.get() {
            return Err(ControllerError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.index = index;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => {
                if let Err(e) = next.jump_to(index) {
                    warn!("Ignoring carousel jump: {}", e);
                    return self;
                }
            }
        }
        debug!("Carousel {:?} -> slide {}", action, next.index);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn index_stays_in_range_for_mixed_navigation() {
        for len in 1..=7 {
            let mut c = carousel(len);
            // Deterministic but irregular walk: forward on most steps,
            // backward whenever the step number hits a multiple of 3 or 5.
            for step in 0..200 {
                if step % 3 == 0 || step % 5 == 0 {
                    c.retreat();
                } else {
                    c.advance();
                }
                assert!(c.index() < len, "len {} step {} index {}", len, step, c.index());
            }
        }
    }

    #[test]
    fn advance_and_retreat_undo_each_other() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = carousel(len);
                c.jump_to(start).unwrap();

                c.advance();
                c.retreat();
                assert_eq!(c.index(), start);

                c.retreat();
                c.advance();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = carousel(len);
                c.jump_to(start).unwrap();
                for _ in 0..len {
                    c.advance();
                }
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut c = carousel(3);
        c.retreat();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut c = carousel(1);
        c.advance();
        assert_eq!(c.index(), 0);
        c.retreat();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn jump_to_sets_exact_index() {
        let mut c = carousel(3);
        c.advance();
        for target in [2, 0, 1, 1] {
            c.jump_to(target).unwrap();
            assert_eq!(c.index(), target);
            assert!(c.is_current(target));
        }
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut c = carousel(3);
        c.jump_to(1).unwrap();
        assert_eq!(
            c.jump_to(3),
            Err(ControllerError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn navigation_after_jump_returns_to_target() {
        let mut c = carousel(4);
        for target in 0..4 {
            c.jump_to(target).unwrap();
            c.retreat();
            c.advance();
            assert_eq!(c.index(), target);
        }
        assert!(c.jump_to(usize::MAX).is_err());
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn seven_advances_over_three_slides_land_on_one() {
        let mut c = carousel(3);
        for _ in 0..7 {
            c.advance();
        }
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn current_resolves_against_table() {
        let slides = ["a", "b", "c"];
        let mut c = carousel(slides.len());
        c.retreat();
        assert_eq!(c.current(&slides), Some(&"c"));
    }

    #[test]
    fn reducer_follows_transition_rules() {
        let state = Rc::new(carousel(3));
        let state = state.reduce(CarouselAction::Retreat);
        assert_eq!(state.index(), 2);
        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(state.index(), 0);
        let state = state.reduce(CarouselAction::JumpTo(1));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn rejected_jump_keeps_same_state() {
        let state = Rc::new(carousel(3));
        let next = state.clone().reduce(CarouselAction::JumpTo(9));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
