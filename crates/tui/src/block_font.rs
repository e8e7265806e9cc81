//! Large block-letter rendering for the drawn number.

const GLYPH_HEIGHT: usize = 7;
const GLYPH_WIDTH: usize = 5;
const SHADOW: usize = 2;
const GAP: usize = 2;
const FILL: char = '█';
const SHADE: char = '░';

type Glyph = [&'static str; GLYPH_HEIGHT];

const DIGITS: [Glyph; 10] = [
    [" ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### "],
    ["  #  ", " ##  ", "# #  ", "  #  ", "  #  ", "  #  ", "#####"],
    [" ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####"],
    [" ### ", "#   #", "    #", "  ## ", "    #", "#   #", " ### "],
    ["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "],
    ["#####", "#    ", "#    ", "#### ", "    #", "#   #", " ### "],
    [" ### ", "#   #", "#    ", "#### ", "#   #", "#   #", " ### "],
    ["#####", "    #", "   # ", "  #  ", " #   ", "#    ", "#    "],
    [" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "],
    [" ### ", "#   #", "#   #", " ####", "    #", "#   #", " ### "],
];

const DASH: Glyph = ["     ", "     ", "     ", "#####", "     ", "     ", "     "];

/// Number of terminal rows produced by [`render`].
pub const HEIGHT: usize = GLYPH_HEIGHT + SHADOW;

/// Render digits as double-width block glyphs with a drop shadow.
/// Characters other than ASCII digits are drawn as a dash.
pub fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<&Glyph> = text
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => &DIGITS[digit as usize],
            None => &DASH,
        })
        .collect();
    if glyphs.is_empty() {
        return vec![String::new(); HEIGHT];
    }

    let cell_width = GLYPH_WIDTH * 2;
    let width = glyphs.len() * cell_width + (glyphs.len() - 1) * GAP + SHADOW * 2;
    let mut canvas = vec![vec![' '; width]; HEIGHT];

    for (index, glyph) in glyphs.iter().enumerate() {
        let origin = index * (cell_width + GAP);
        for (y, row) in glyph.iter().enumerate() {
            for (col, symbol) in row.chars().enumerate() {
                if symbol == '#' {
                    paint(&mut canvas, y, origin + col * 2);
                }
            }
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

fn paint(canvas: &mut [Vec<char>], y: usize, x: usize) {
    for dy in [SHADOW - 1, SHADOW] {
        for dx in 0..2 {
            place(canvas, y + dy, x + SHADOW * 2 + dx, SHADE);
        }
    }
    place(canvas, y, x, FILL);
    place(canvas, y, x + 1, FILL);
}

fn place(canvas: &mut [Vec<char>], y: usize, x: usize, ch: char) {
    let Some(cell) = canvas.get_mut(y).and_then(|row| row.get_mut(x)) else {
        return;
    };
    if *cell == ' ' || (*cell == SHADE && ch == FILL) {
        *cell = ch;
    }
}
