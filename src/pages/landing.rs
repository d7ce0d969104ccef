use log::{error, info};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction};
use crate::components::offer_bar::OfferBar;
use crate::components::slideshow::Slideshow;
use crate::config;
use crate::content::{
    COLLECTION_COVER_URL, DELIVERABLES, FEATURES, NEW_PRICE, OLD_PRICE, RATING, SLIDES,
    SLIDE_COUNT, TESTIMONIALS, star_row,
};
use crate::countdown::{Countdown, CountdownAction};
use crate::pages::landing_css::LANDING_CSS;
use crate::timers::{BrowserScheduler, PageTimers};

#[function_component(Landing)]
pub fn landing() -> Html {
    let carousel = use_reducer(|| Carousel::new(SLIDE_COUNT));
    let countdown = use_reducer(Countdown::default);
    let product_ref = use_node_ref();

    // Both timers start on mount and are dropped together on unmount
    {
        let carousel = carousel.dispatcher();
        let countdown = countdown.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timers = match PageTimers::start(
                    &BrowserScheduler,
                    move || carousel.dispatch(CarouselAction::Advance),
                    move || countdown.dispatch(CountdownAction::Tick),
                ) {
                    Ok(timers) => {
                        info!("Landing page mounted, carousel and countdown running");
                        Some(timers)
                    }
                    Err(e) => {
                        error!("Landing page timers not started: {}", e);
                        None
                    }
                };

                move || {
                    drop(timers);
                    info!("Landing page unmounted");
                }
            },
            (),
        );
    }

    let on_advance = {
        let carousel = carousel.dispatcher();
        Callback::from(move |_: ()| carousel.dispatch(CarouselAction::Advance))
    };
    let on_retreat = {
        let carousel = carousel.dispatcher();
        Callback::from(move |_: ()| carousel.dispatch(CarouselAction::Retreat))
    };
    let on_jump_to = {
        let carousel = carousel.dispatcher();
        Callback::from(move |index: usize| carousel.dispatch(CarouselAction::JumpTo(index)))
    };

    let scroll_to_product = {
        let product_ref = product_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(section) = product_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <OfferBar countdown={*countdown} />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Transforme o tempo de tela de seus filhos, por aprendizado e conhecimento sobre Cristo"}</h1>
                    <div class="discount-badge">{"Oferta Especial: 70% de Desconto Imediato"}</div>
                    <p class="hero-subtitle">
                        {"Nossos livros digitais trazem as histórias da bíblia com o traço fofo que encanta crianças e adultos. Economize mais de R$ 20 hoje."}
                    </p>
                    <button class="hero-cta pulse" onclick={scroll_to_product.clone()}>
                        {"Garantir Meus Livros Agora →"}
                    </button>
                </div>
            </header>

            <Slideshow
                slides={SLIDES}
                carousel={*carousel}
                {on_advance}
                {on_retreat}
                {on_jump_to}
            />

            <Features />
            <Testimonials />
            <ProductShowcase section_ref={product_ref} />

            <section class="final-cta">
                <div class="final-cta-box">
                    <h2>{"Dê o primeiro passo hoje"}</h2>
                    <p>
                        {"Aproveite o desconto de 70% e comece a construir o alicerce espiritual de seus filhos agora mesmo."}
                    </p>
                    <div class="final-cta-actions">
                        <button class="final-cta-button pulse" onclick={scroll_to_product}>
                            {"Garantir Meus Livros"}
                        </button>
                        <span class="secure-note">{"🛡 Pagamento 100% Seguro"}</span>
                    </div>
                </div>
            </section>

            <footer class="landing-footer">
                <p>{"© 2026 Educação Cristã Infantil. Todos os direitos reservados."}</p>
                <div class="footer-links">
                    <a href="#">{"Termos de Uso"}</a>
                    <a href="#">{"Privacidade"}</a>
                    <a href="#">{"Contato"}</a>
                </div>
            </footer>
        </div>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            <h2>{"Por que escolher nosso método?"}</h2>
            <p class="section-subtitle">
                {"Desenvolvemos uma estrutura completa para garantir que você tenha tudo o que precisa para ter sucesso."}
            </p>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-item" key={feature.title}>
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let stars = star_row();

    html! {
        <section class="testimonials">
            <div class="testimonials-summary">
                <h2>{"O que os pais estão dizendo"}</h2>
                <p>
                    {"Mais de 5.000 famílias já transformaram o tempo de tela em momentos de fé. Veja alguns depoimentos reais."}
                </p>
                <div class="rating">
                    <span class="stars">{stars}</span>
                    <span class="rating-text">{RATING}</span>
                </div>
                <p class="rating-note">{"Baseado em avaliações de pais e educadores."}</p>
            </div>
            <div class="testimonials-list">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div class="testimonial" key={t.name}>
                        <div class="testimonial-header">
                            <span class="verified">{"✓"}</span>
                            <span class="testimonial-name">{t.name}</span>
                            <span class="separator">{"•"}</span>
                            <span class="testimonial-role">{t.role}</span>
                        </div>
                        <p class="testimonial-content">{format!("\"{}\"", t.content)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProductShowcaseProps {
    section_ref: NodeRef,
}

#[function_component(ProductShowcase)]
fn product_showcase(props: &ProductShowcaseProps) -> Html {
    html! {
        <section class="product" ref={props.section_ref.clone()}>
            <div class="product-image">
                <img
                    src={COLLECTION_COVER_URL}
                    alt="Coleção de Livros Digitais"
                    referrerpolicy="no-referrer"
                />
                <div class="collection-badge">
                    <p class="collection-title">{"Coleção Completa"}</p>
                    <p class="collection-count">{"12 Livros Digitais Ilustrados"}</p>
                </div>
            </div>
            <div class="product-details">
                <h2>{"O que você vai receber"}</h2>
                <ul class="deliverables">
                    { for DELIVERABLES.iter().map(|item| html! {
                        <li key={*item}>
                            <span class="check">{"✓"}</span>
                            {*item}
                        </li>
                    }) }
                </ul>
                <div class="price-box">
                    <p class="old-price">{format!("De {}", OLD_PRICE)}</p>
                    <p class="new-price">{format!("Por apenas {}", NEW_PRICE)}</p>
                    <a
                        class="checkout-link pulse"
                        href={config::checkout_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Aproveitar Desconto de 70%"}
                    </a>
                </div>
            </div>
        </section>
    }
}
