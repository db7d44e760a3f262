use crate::core::markup;
use crate::core::venue::ResolvedConfig;
use crate::core::Corner;
use web_sys as web;

/// Render the card for `corner` into the overlay root, or empty it.
pub fn show(root: &web::Element, config: &ResolvedConfig, corner: Corner) {
    let venue = config.venue_at(corner);
    root.set_inner_html(&markup::overlay_card(
        venue,
        &config.primary_cta_label,
        &config.secondary_cta_label,
    ));
    _ = root.class_list().remove_1("hidden");
}

pub fn hide(root: &web::Element) {
    root.set_inner_html("");
    _ = root.class_list().add_1("hidden");
}
