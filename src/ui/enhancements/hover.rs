use web_sys::MouseEvent;

use crate::core::motion::HoverGroup;
use crate::core::selectors;
use crate::ui::dom::{self, DomResult};

/// Lift cards while the pointer is over them
pub fn install() -> DomResult<()> {
    for group in HoverGroup::ALL {
        for card in dom::query_all(group.selector())? {
            let target = card.clone();
            dom::listen(&card, "mouseenter", move |_: MouseEvent| {
                let featured = target.class_list().contains(selectors::PRICING_FEATURED_CLASS);
                if let Some(transform) = group.enter_transform(featured) {
                    let _ = dom::set_style(&target, "transform", transform);
                }
            })?;

            let target = card.clone();
            dom::listen(&card, "mouseleave", move |_: MouseEvent| {
                let featured = target.class_list().contains(selectors::PRICING_FEATURED_CLASS);
                if let Some(transform) = group.leave_transform(featured) {
                    let _ = dom::set_style(&target, "transform", transform);
                }
            })?;
        }
    }
    Ok(())
}
