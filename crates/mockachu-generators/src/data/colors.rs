//! Color datasets: a short list of everyday colors and the HTML palette.

use super::Color;

const fn col(name: &'static str, hex: &'static str) -> Color {
    Color { name, hex }
}

pub static COMMON_COLORS: &[Color] = &[
    col("Red", "#FF0000"),
    col("Green", "#008000"),
    col("Blue", "#0000FF"),
    col("Yellow", "#FFFF00"),
    col("Orange", "#FFA500"),
    col("Purple", "#800080"),
    col("Pink", "#FFC0CB"),
    col("Brown", "#A52A2A"),
    col("Black", "#000000"),
    col("White", "#FFFFFF"),
    col("Gray", "#808080"),
    col("Cyan", "#00FFFF"),
    col("Magenta", "#FF00FF"),
    col("Lime", "#00FF00"),
    col("Maroon", "#800000"),
    col("Navy", "#000080"),
];

pub static HTML_COLORS: &[Color] = &[
    col("AliceBlue", "#F0F8FF"),
    col("AntiqueWhite", "#FAEBD7"),
    col("Aquamarine", "#7FFFD4"),
    col("Azure", "#F0FFFF"),
    col("Beige", "#F5F5DC"),
    col("Bisque", "#FFE4C4"),
    col("BlanchedAlmond", "#FFEBCD"),
    col("BlueViolet", "#8A2BE2"),
    col("CadetBlue", "#5F9EA0"),
    col("Chartreuse", "#7FFF00"),
    col("Chocolate", "#D2691E"),
    col("Coral", "#FF7F50"),
    col("CornflowerBlue", "#6495ED"),
    col("Crimson", "#DC143C"),
    col("DarkGoldenrod", "#B8860B"),
    col("DarkOliveGreen", "#556B2F"),
    col("DarkOrchid", "#9932CC"),
    col("DarkSalmon", "#E9967A"),
    col("DarkSlateBlue", "#483D8B"),
    col("DeepPink", "#FF1493"),
    col("DeepSkyBlue", "#00BFFF"),
    col("DodgerBlue", "#1E90FF"),
    col("Firebrick", "#B22222"),
    col("ForestGreen", "#228B22"),
    col("Gainsboro", "#DCDCDC"),
    col("Goldenrod", "#DAA520"),
    col("Honeydew", "#F0FFF0"),
    col("HotPink", "#FF69B4"),
    col("IndianRed", "#CD5C5C"),
    col("Indigo", "#4B0082"),
    col("Khaki", "#F0E68C"),
    col("Lavender", "#E6E6FA"),
    col("LawnGreen", "#7CFC00"),
    col("LightCoral", "#F08080"),
    col("LightSeaGreen", "#20B2AA"),
    col("MediumOrchid", "#BA55D3"),
    col("MediumSeaGreen", "#3CB371"),
    col("MidnightBlue", "#191970"),
    col("Moccasin", "#FFE4B5"),
    col("OliveDrab", "#6B8E23"),
    col("Orchid", "#DA70D6"),
    col("PaleTurquoise", "#AFEEEE"),
    col("PeachPuff", "#FFDAB9"),
    col("Plum", "#DDA0DD"),
    col("RosyBrown", "#BC8F8F"),
    col("RoyalBlue", "#4169E1"),
    col("SaddleBrown", "#8B4513"),
    col("SeaGreen", "#2E8B57"),
    col("Sienna", "#A0522D"),
    col("SlateGray", "#708090"),
    col("SpringGreen", "#00FF7F"),
    col("SteelBlue", "#4682B4"),
    col("Teal", "#008080"),
    col("Tomato", "#FF6347"),
    col("Turquoise", "#40E0D0"),
    col("Violet", "#EE82EE"),
    col("Wheat", "#F5DEB3"),
    col("YellowGreen", "#9ACD32"),
];
