//! Top-level entry point for running the picker as a native window.

use eframe::egui;

use crate::config::PickerConfig;

use super::picker_app::PickerApp;

/// Launch the picker in a native window.
///
/// 1. Constructs a [`PickerApp`] from `cfg`.
/// 2. Opens a native window and, once the egui context exists, loads
///    `cfg.image` if one was given.
/// 3. Enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_picker(mut cfg: PickerConfig) -> eframe::Result<()> {
    let mut app = PickerApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.window_size;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    let initial_image = cfg.image.take();
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            if let Some(path) = initial_image {
                app.main_panel.load_image_path(&cc.egui_ctx, &path);
            }
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;
    render_svg_icon(&data)
}

fn render_svg_icon(data: &[u8]) -> Option<egui::IconData> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_renders() {
        let icon = load_app_icon_svg().expect("icon.svg should render");
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }

    #[test]
    fn garbage_svg_is_rejected() {
        assert!(render_svg_icon(b"not an svg").is_none());
    }
}
