use crate::domain::weather::BackgroundClass;

pub(super) type Rgb = (u8, u8, u8);

/// Left and right gradient stops per backdrop class.
const BACKGROUND_GRADIENTS: &[(BackgroundClass, (Rgb, Rgb))] = &[
    (BackgroundClass::Clear, ((254, 249, 195), (253, 186, 116))),
    (BackgroundClass::Clouds, ((229, 231, 235), (156, 163, 175))),
    (BackgroundClass::Rain, ((96, 165, 250), (30, 64, 175))),
    (BackgroundClass::Snow, ((255, 255, 255), (219, 234, 254))),
    (BackgroundClass::Haze, ((209, 213, 219), (107, 114, 128))),
    (BackgroundClass::Neutral, ((186, 230, 253), (254, 205, 211))),
    (BackgroundClass::Idle, ((186, 230, 253), (254, 205, 211))),
];

pub(super) fn gradient_seed(background: BackgroundClass) -> (Rgb, Rgb) {
    BACKGROUND_GRADIENTS
        .iter()
        .find_map(|(candidate, stops)| (*candidate == background).then_some(*stops))
        .unwrap_or(((186, 230, 253), (254, 205, 211)))
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Surfaces {
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    pub particle: Rgb,
}

pub(super) const LIGHT_SURFACES: Surfaces = Surfaces {
    surface: (249, 250, 251),
    text: (31, 41, 55),
    muted: (75, 85, 99),
    border: (156, 163, 175),
    particle: (255, 255, 255),
};

pub(super) const DARK_SURFACES: Surfaces = Surfaces {
    surface: (31, 41, 55),
    text: (255, 255, 255),
    muted: (209, 213, 219),
    border: (75, 85, 99),
    particle: (148, 163, 184),
};
