use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::content::{Testimonial, TESTIMONIALS};

pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Advance => (self.index + 1) % self.len,
            CarouselAction::Select(i) if i < self.len => i,
            CarouselAction::Select(_) => return self,
        };
        Rc::new(Carousel { index, len: self.len })
    }
}

fn render_testimonial(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial">
            <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
            <div class="testimonial-stars">
                { for (0..testimonial.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
            </div>
            <p class="testimonial-author">{testimonial.name}</p>
            <p class="testimonial-location">{testimonial.location}</p>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel {
        index: 0,
        len: TESTIMONIALS.len(),
    });

    // Advance on a fixed timer; dropped on unmount.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(move |_| {
            let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let interval = Interval::new(TESTIMONIAL_INTERVAL_MS, move || {
                carousel.dispatch(CarouselAction::Advance);
            });
            *interval_handle.borrow_mut() = Some(interval);

            move || {
                if let Some(interval) = interval_handle.borrow_mut().take() {
                    drop(interval);
                }
            }
        }, ());
    }

    html! {
        <div class="testimonials-container">
            {
                match TESTIMONIALS.get(carousel.index) {
                    Some(testimonial) => render_testimonial(testimonial),
                    None => html! {},
                }
            }
            <div class="testimonial-dots">
                { for (0..carousel.len).map(|i| {
                    let carousel = carousel.clone();
                    let active = i == carousel.index;
                    let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(i)));
                    html! { <div class={classes!("dot", active.then(|| "active"))} {onclick}></div> }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(len: usize, actions: Vec<CarouselAction>) -> Vec<usize> {
        let mut state = Rc::new(Carousel { index: 0, len });
        let mut seen = vec![state.index];
        for action in actions {
            state = state.reduce(action);
            seen.push(state.index);
        }
        seen
    }

    #[test]
    fn ticks_wrap_around_five_items() {
        let seen = run(5, (0..6).map(|_| CarouselAction::Advance).collect());
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn dot_click_jumps_immediately() {
        let seen = run(
            5,
            vec![CarouselAction::Advance, CarouselAction::Select(4), CarouselAction::Advance],
        );
        assert_eq!(seen, vec![0, 1, 4, 0]);
    }

    #[test]
    fn out_of_range_dot_is_ignored() {
        let seen = run(5, vec![CarouselAction::Select(9)]);
        assert_eq!(seen, vec![0, 0]);
    }

    #[test]
    fn empty_list_never_moves() {
        let seen = run(0, vec![CarouselAction::Advance]);
        assert_eq!(seen, vec![0, 0]);
    }
}
