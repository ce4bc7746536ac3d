//! Parallax offsets and hover transforms

/// Fraction of the scroll offset the floating cards travel, before the
/// per-card speed is applied. Negative values move against the scroll.
pub const PARALLAX_RATE: f64 = -0.5;

/// Speed of the first floating card
pub const PARALLAX_BASE_SPEED: f64 = 0.1;

/// Extra speed for each following card
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

/// Vertical offset in pixels of the floating card at `index`
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP;
    scroll_y * PARALLAX_RATE * speed
}

/// CSS transform for the floating card at `index`
pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, index))
}

/// Card groups with a hover lift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverGroup {
    ServiceCard,
    PortfolioItem,
    PricingCard,
}

impl HoverGroup {
    pub const ALL: [HoverGroup; 3] = [
        HoverGroup::ServiceCard,
        HoverGroup::PortfolioItem,
        HoverGroup::PricingCard,
    ];

    pub fn selector(&self) -> &'static str {
        use crate::core::selectors;
        match self {
            HoverGroup::ServiceCard => selectors::SERVICE_CARD,
            HoverGroup::PortfolioItem => selectors::PORTFOLIO_ITEM,
            HoverGroup::PricingCard => selectors::PRICING_CARD,
        }
    }

    /// Transform while the pointer is over the card.
    ///
    /// `None` means the card keeps its current transform.
    pub fn enter_transform(&self, featured: bool) -> Option<&'static str> {
        match self {
            HoverGroup::ServiceCard => Some("translateY(-8px) scale(1.02)"),
            HoverGroup::PortfolioItem => Some("translateY(-8px)"),
            HoverGroup::PricingCard if featured => None,
            HoverGroup::PricingCard => Some("translateY(-8px)"),
        }
    }

    /// Transform once the pointer has left the card
    pub fn leave_transform(&self, featured: bool) -> Option<&'static str> {
        match self {
            HoverGroup::ServiceCard => Some("translateY(0) scale(1)"),
            HoverGroup::PortfolioItem => Some("translateY(0)"),
            HoverGroup::PricingCard if featured => None,
            HoverGroup::PricingCard => Some("translateY(0)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_speed_grows_with_index() {
        assert!((parallax_offset(100.0, 0) - -5.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 1) - -7.5).abs() < 1e-9);
        assert!((parallax_offset(100.0, 2) - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_at_top_is_zero() {
        assert_eq!(parallax_offset(0.0, 3), 0.0);
    }

    #[test]
    fn test_parallax_transform_format() {
        assert_eq!(parallax_transform(200.0, 0), "translateY(-10px)");
    }

    #[test]
    fn test_service_card_hover() {
        let group = HoverGroup::ServiceCard;
        assert_eq!(
            group.enter_transform(false),
            Some("translateY(-8px) scale(1.02)")
        );
        assert_eq!(group.leave_transform(false), Some("translateY(0) scale(1)"));
    }

    #[test]
    fn test_featured_pricing_card_is_left_alone() {
        let group = HoverGroup::PricingCard;
        assert_eq!(group.enter_transform(true), None);
        assert_eq!(group.leave_transform(true), None);
        assert_eq!(group.enter_transform(false), Some("translateY(-8px)"));
        assert_eq!(group.leave_transform(false), Some("translateY(0)"));
    }

    #[test]
    fn test_featured_flag_only_matters_for_pricing() {
        assert_eq!(
            HoverGroup::PortfolioItem.enter_transform(true),
            Some("translateY(-8px)")
        );
    }

    #[test]
    fn test_group_selectors() {
        assert_eq!(HoverGroup::ServiceCard.selector(), ".service__card");
        assert_eq!(HoverGroup::PortfolioItem.selector(), ".portfolio__item");
        assert_eq!(HoverGroup::PricingCard.selector(), ".pricing__card");
    }
}
