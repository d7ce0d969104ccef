use yew::prelude::*;

use crate::countdown::Countdown;

#[derive(Properties, PartialEq)]
pub struct OfferBarProps {
    pub countdown: Countdown,
}

/// Sticky urgency bar at the top of the page.
#[function_component(OfferBar)]
pub fn offer_bar(props: &OfferBarProps) -> Html {
    html! {
        <div class="offer-bar">
            {"⚠️ Oferta Expira em "}
            <span class="offer-time">{props.countdown.format()}</span>
            {" Minutos"}
        </div>
    }
}
