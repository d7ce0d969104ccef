// Static copy for the landing page. Everything shown on the page lives here.

use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub url: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        url: "https://i.imgur.com/Q6y33mm.png",
        title: "Histórias Bíblicas Encantadoras",
        desc: "Ilustrações fofas que prendem a atenção e ensinam valores eternos.",
    },
    Slide {
        url: "https://i.imgur.com/P8U7TLK.png",
        title: "Aprendizado Divertido",
        desc: "Transforme o momento da leitura em uma jornada de fé para os pequenos.",
    },
    Slide {
        url: "https://i.imgur.com/0Ujutvo.png",
        title: "Conhecimento sobre Cristo",
        desc: "Livros digitais práticos para ler em qualquer lugar, a qualquer hora.",
    },
];

/// Number of slides, checked at compile time so the carousel always has
/// something to show.
pub const SLIDE_COUNT: NonZeroUsize = match NonZeroUsize::new(SLIDES.len()) {
    Some(count) => count,
    None => panic!("the slide table must not be empty"),
};

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Acesso Imediato",
        desc: "Receba seus livros digitais na hora e comece a ler hoje mesmo.",
    },
    Feature {
        icon: "🛡",
        title: "Conteúdo Seguro",
        desc: "Histórias fiéis à bíblia com linguagem adaptada para crianças.",
    },
    Feature {
        icon: "👪",
        title: "Para Toda Família",
        desc: "Momentos de conexão entre pais e filhos através da palavra.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Carla Mendes",
        role: "Mãe de 2 filhos",
        content: "Meus filhos amaram as ilustrações! Agora eles pedem para ler as histórias da bíblia antes de dormir em vez de quererem o celular.",
    },
    Testimonial {
        name: "Ricardo Santos",
        role: "Pai e Educador",
        content: "Uma ferramenta maravilhosa para introduzir os valores cristãos de forma leve e divertida. O traço é realmente encantador.",
    },
];

pub const DELIVERABLES: &[&str] = &[
    "12 Histórias Bíblicas com ilustrações exclusivas",
    "Atividades para colorir em cada livro",
    "Guia para pais sobre como contar as histórias",
    "Acesso vitalício em qualquer dispositivo",
    "7 Dias de Garantia Incondicional",
];

pub const COLLECTION_COVER_URL: &str = "https://i.imgur.com/v8mFrx2.png";
pub const OLD_PRICE: &str = "R$ 49,90";
pub const NEW_PRICE: &str = "R$ 10,00";
pub const RATING: &str = "4.9/5 estrelas";
pub const RATING_STARS: usize = 5;

/// Row of filled stars shown next to the rating.
pub fn star_row() -> String {
    "★".repeat(RATING_STARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_count_matches_table() {
        assert_eq!(SLIDE_COUNT.get(), SLIDES.len());
        assert_eq!(SLIDE_COUNT.get(), 3);
    }

    #[test]
    fn star_row_has_one_glyph_per_star() {
        let stars = star_row();
        assert_eq!(stars.chars().count(), RATING_STARS);
        assert!(stars.chars().all(|c| c == '★'));
    }

    #[test]
    fn every_slide_has_an_image_and_copy() {
        for slide in SLIDES {
            assert!(slide.url.starts_with("https://"));
            assert!(!slide.title.is_empty());
            assert!(!slide.desc.is_empty());
        }
    }
}
