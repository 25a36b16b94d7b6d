//! Layout Variants
//!
//! Presentation-only densities for the card grid. Nothing here feeds back
//! into filtering, sorting or pagination.

/// Card density selected by the layout toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
    Compact,
    #[default]
    Standard,
    List,
}

/// CSS and visibility settings for one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub grid_class: &'static str,
    pub card_class: &'static str,
    pub min_height_class: &'static str,
    /// Whether cards show the registration-date line
    pub show_details: bool,
}

const LAYOUTS: [(LayoutKind, LayoutParams); 3] = [
    (
        LayoutKind::Compact,
        LayoutParams {
            grid_class: "grid-cols-1 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4",
            card_class: "flex-col h-[200px]",
            min_height_class: "min-h-[200px]",
            show_details: false,
        },
    ),
    (
        LayoutKind::Standard,
        LayoutParams {
            grid_class: "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
            card_class: "flex-col h-[260px]",
            min_height_class: "min-h-[250px]",
            show_details: true,
        },
    ),
    (
        LayoutKind::List,
        LayoutParams {
            grid_class: "grid-cols-1 gap-4",
            card_class: "flex-row items-center",
            min_height_class: "min-h-[150px] md:min-h-[130px]",
            show_details: true,
        },
    ),
];

impl LayoutKind {
    pub const ALL: [LayoutKind; 3] = [LayoutKind::Compact, LayoutKind::Standard, LayoutKind::List];

    pub fn params(&self) -> LayoutParams {
        LAYOUTS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, params)| *params)
            .unwrap_or(LAYOUTS[1].1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Compact => "compact",
            LayoutKind::Standard => "grid",
            LayoutKind::List => "row",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutKind::Compact => "Compacto",
            LayoutKind::Standard => "Estandar",
            LayoutKind::List => "Vista Lista",
        }
    }
}
