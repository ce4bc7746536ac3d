//! Hero title typing effect

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::core::selectors;
use crate::core::typing::{TYPING_START_DELAY_MS, TYPING_WORD_DELAY_MS, TypingEffect};
use crate::ui::dom::{self, DomResult};

pub fn install() -> DomResult<()> {
    let title = dom::query(selectors::HERO_TITLE)?;
    let effect = TypingEffect::new(&title.text_content().unwrap_or_default());
    title.set_text_content(Some(""));

    let effect = Rc::new(RefCell::new(effect));
    Timeout::new(TYPING_START_DELAY_MS, move || type_next(title, effect)).forget();
    Ok(())
}

fn type_next(title: HtmlElement, effect: Rc<RefCell<TypingEffect>>) {
    let typed = effect.borrow_mut().next_word().map(str::to_string);
    let Some(text) = typed else {
        return;
    };
    title.set_text_content(Some(&text));

    Timeout::new(TYPING_WORD_DELAY_MS, move || type_next(title, effect)).forget();
}
