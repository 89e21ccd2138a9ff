/// Where the product-page button is inserted, as a render priority.
///
/// The four named points match the storefront's product summary hooks.
/// Any other integer is kept as `Custom` and only means something to the
/// external renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPosition {
    AfterPrice,
    AfterShortDescription,
    #[default]
    AfterAddToCart,
    AfterMeta,
    Custom(i64),
}

impl ButtonPosition {
    pub const NAMED: [ButtonPosition; 4] = [
        ButtonPosition::AfterPrice,
        ButtonPosition::AfterShortDescription,
        ButtonPosition::AfterAddToCart,
        ButtonPosition::AfterMeta,
    ];

    pub fn from_priority(priority: i64) -> Self {
        match priority {
            15 => Self::AfterPrice,
            25 => Self::AfterShortDescription,
            35 => Self::AfterAddToCart,
            45 => Self::AfterMeta,
            other => Self::Custom(other),
        }
    }

    pub fn priority(&self) -> i64 {
        match self {
            Self::AfterPrice => 15,
            Self::AfterShortDescription => 25,
            Self::AfterAddToCart => 35,
            Self::AfterMeta => 45,
            Self::Custom(p) => *p,
        }
    }

    /// Human-readable name for the settings form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AfterPrice => "After product price",
            Self::AfterShortDescription => "After product short description",
            Self::AfterAddToCart => "After add to cart button",
            Self::AfterMeta => "After product meta",
            Self::Custom(_) => "Custom priority",
        }
    }
}
