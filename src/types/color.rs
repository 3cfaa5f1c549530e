//! AutoCAD Color Index (ACI) palette
//!
//! Entity colors in DXF are small integers into a fixed 256-entry palette.
//! Two values are sentinels: 0 means "by block" and 256 means "by layer".

/// Color index meaning "inherit the color of the owning block"
pub const BY_BLOCK: i32 = 0;

/// Color index meaning "inherit the color of the entity's layer"
pub const BY_LAYER: i32 = 256;

/// White/black foreground, used when neither the entity nor its layer
/// defines a color
pub const DEFAULT_COLOR_INDEX: i32 = 7;

const ACI_HEX: [&str; 256] = [
    "#000000", "#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff", "#ffffff",
    "#808080", "#c0c0c0", "#ff0000", "#ff7f7f", "#cc0000", "#cc6666", "#990000", "#994c4c",
    "#7f0000", "#7f3f3f", "#4c0000", "#4c2626", "#ff3f00", "#ff9f7f", "#cc3300", "#cc7f66",
    "#992600", "#995f4c", "#7f1f00", "#7f4f3f", "#4c1300", "#4c2f26", "#ff7f00", "#ffbf7f",
    "#cc6600", "#cc9966", "#994c00", "#99724c", "#7f3f00", "#7f5f3f", "#4c2600", "#4c3926",
    "#ffbf00", "#ffdf7f", "#cc9900", "#ccb266", "#997200", "#99854c", "#7f5f00", "#7f6f3f",
    "#4c3900", "#4c4226", "#ffff00", "#ffff7f", "#cccc00", "#cccc66", "#999900", "#99994c",
    "#7f7f00", "#7f7f3f", "#4c4c00", "#4c4c26", "#bfff00", "#dfff7f", "#99cc00", "#b2cc66",
    "#729900", "#85994c", "#5f7f00", "#6f7f3f", "#394c00", "#424c26", "#7fff00", "#bfff7f",
    "#66cc00", "#99cc66", "#4c9900", "#72994c", "#3f7f00", "#5f7f3f", "#264c00", "#394c26",
    "#3fff00", "#9fff7f", "#33cc00", "#7fcc66", "#269900", "#5f994c", "#1f7f00", "#4f7f3f",
    "#134c00", "#2f4c26", "#00ff00", "#7fff7f", "#00cc00", "#66cc66", "#009900", "#4c994c",
    "#007f00", "#3f7f3f", "#004c00", "#264c26", "#00ff3f", "#7fff9f", "#00cc33", "#66cc7f",
    "#009926", "#4c995f", "#007f1f", "#3f7f4f", "#004c13", "#264c2f", "#00ff7f", "#7fffbf",
    "#00cc66", "#66cc99", "#00994c", "#4c9972", "#007f3f", "#3f7f5f", "#004c26", "#264c39",
    "#00ffbf", "#7fffdf", "#00cc99", "#66ccb2", "#009972", "#4c9985", "#007f5f", "#3f7f6f",
    "#004c39", "#264c42", "#00ffff", "#7fffff", "#00cccc", "#66cccc", "#009999", "#4c9999",
    "#007f7f", "#3f7f7f", "#004c4c", "#264c4c", "#00bfff", "#7fdfff", "#0099cc", "#66b2cc",
    "#007299", "#4c8599", "#005f7f", "#3f6f7f", "#00394c", "#26424c", "#007fff", "#7fbfff",
    "#0066cc", "#6699cc", "#004c99", "#4c7299", "#003f7f", "#3f5f7f", "#00264c", "#26394c",
    "#003fff", "#7f9fff", "#0033cc", "#667fcc", "#002699", "#4c5f99", "#001f7f", "#3f4f7f",
    "#00134c", "#262f4c", "#0000ff", "#7f7fff", "#0000cc", "#6666cc", "#000099", "#4c4c99",
    "#00007f", "#3f3f7f", "#00004c", "#26264c", "#3f00ff", "#9f7fff", "#3300cc", "#7f66cc",
    "#260099", "#5f4c99", "#1f007f", "#4f3f7f", "#13004c", "#2f264c", "#7f00ff", "#bf7fff",
    "#6600cc", "#9966cc", "#4c0099", "#724c99", "#3f007f", "#5f3f7f", "#26004c", "#39264c",
    "#bf00ff", "#df7fff", "#9900cc", "#b266cc", "#720099", "#854c99", "#5f007f", "#6f3f7f",
    "#39004c", "#42264c", "#ff00ff", "#ff7fff", "#cc00cc", "#cc66cc", "#990099", "#994c99",
    "#7f007f", "#7f3f7f", "#4c004c", "#4c264c", "#ff00bf", "#ff7fdf", "#cc0099", "#cc66b2",
    "#990072", "#994c85", "#7f005f", "#7f3f6f", "#4c0039", "#4c2642", "#ff007f", "#ff7fbf",
    "#cc0066", "#cc6699", "#99004c", "#994c72", "#7f003f", "#7f3f5f", "#4c0026", "#4c2639",
    "#ff003f", "#ff7f9f", "#cc0033", "#cc667f", "#990026", "#994c5f", "#7f001f", "#7f3f4f",
    "#4c0013", "#4c262f", "#333333", "#505050", "#696969", "#828282", "#bebebe", "#ffffff",
];

/// Look up the hex color (`#rrggbb`) of an ACI index.
///
/// Indices outside the palette fall back to the default foreground color.
pub fn aci_to_hex(index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| ACI_HEX.get(i))
        .copied()
        .unwrap_or(ACI_HEX[DEFAULT_COLOR_INDEX as usize])
}

/// Resolve the effective color index of an entity.
///
/// An absent entity color or [`BY_LAYER`] defers to the absolute value of the
/// layer color (layers switched off store a negative index); an unknown layer
/// yields [`DEFAULT_COLOR_INDEX`].
pub fn resolve_color_index(entity_color: Option<i32>, layer_color: Option<i32>) -> i32 {
    match entity_color {
        Some(index) if index != BY_LAYER => index,
        _ => layer_color.map_or(DEFAULT_COLOR_INDEX, i32::saturating_abs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(aci_to_hex(1), "#ff0000");
        assert_eq!(aci_to_hex(2), "#ffff00");
        assert_eq!(aci_to_hex(5), "#0000ff");
        assert_eq!(aci_to_hex(7), "#ffffff");
        assert_eq!(aci_to_hex(0), "#000000");
    }

    #[test]
    fn test_palette_ramps() {
        assert_eq!(aci_to_hex(10), "#ff0000");
        assert_eq!(aci_to_hex(11), "#ff7f7f");
        assert_eq!(aci_to_hex(30), "#ff7f00");
        assert_eq!(aci_to_hex(250), "#333333");
        assert_eq!(aci_to_hex(255), "#ffffff");
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(aci_to_hex(-3), "#ffffff");
        assert_eq!(aci_to_hex(300), "#ffffff");
    }

    #[test]
    fn test_resolve_color_index() {
        assert_eq!(resolve_color_index(Some(3), Some(5)), 3);
        assert_eq!(resolve_color_index(None, Some(5)), 5);
        assert_eq!(resolve_color_index(Some(BY_LAYER), Some(-2)), 2);
        assert_eq!(resolve_color_index(None, None), 7);
        assert_eq!(resolve_color_index(Some(BY_BLOCK), Some(5)), 0);
    }

    #[test]
    fn test_resolve_extreme_layer_color() {
        let index = resolve_color_index(None, Some(i32::MIN));
        assert_eq!(index, i32::MAX);
        assert_eq!(aci_to_hex(index), "#ffffff");
    }
}
