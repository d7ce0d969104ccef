use yew::prelude::*;

use crate::carousel::Carousel;
use crate::content::Slide;

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub slides: &'static [Slide],
    pub carousel: Carousel,
    pub on_advance: Callback<()>,
    pub on_retreat: Callback<()>,
    pub on_jump_to: Callback<usize>,
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let current = props.carousel.index();

    let slide = match props.carousel.current(props.slides) {
        Some(slide) => html! {
            // Keyed on the index so the enter animation replays on every change
            <div class="slide" key={current.to_string()}>
                <img
                    src={slide.url}
                    alt={slide.title}
                    referrerpolicy="no-referrer"
                />
                <div class="slide-caption">
                    <h3>{slide.title}</h3>
                    <p>{slide.desc}</p>
                </div>
            </div>
        },
        None => html! {},
    };

    let prev = props.on_retreat.reform(|_: MouseEvent| ());
    let next = props.on_advance.reform(|_: MouseEvent| ());

    html! {
        <section class="carousel-section">
            <div class="carousel">
                <div class="carousel-frame">
                    { slide }
                </div>
                <button class="carousel-control prev" onclick={prev} aria-label="Anterior">
                    {"‹"}
                </button>
                <button class="carousel-control next" onclick={next} aria-label="Próximo">
                    {"›"}
                </button>
                <div class="carousel-dots">
                    { for (0..props.carousel.slide_count()).map(|i| {
                        let onclick = props.on_jump_to.reform(move |_: MouseEvent| i);
                        html! {
                            <button
                                key={i.to_string()}
                                class={classes!("dot", props.carousel.is_current(i).then(|| "active"))}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
