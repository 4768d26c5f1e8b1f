// Writes swatches.html: the two series sequences and each palette's
// role colors, for eyeballing the catalog.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGBA8;
use chart_palette::{ColorPalette, DefaultColorPalette, AlternateColorPalette,
                    colors};

type Err = Box<dyn Error>;

fn css_string(c: RGBA8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGBA8],
                   comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: 60px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn roles(fh: &mut impl Write, palette: &dyn ColorPalette,
         comment: &str) -> Result<(), Err> {
    let colors = [palette.background_color(),
                  palette.background_stroke_color(),
                  palette.canvas_color(),
                  palette.canvas_stroke_color(),
                  palette.axis_stroke_color(),
                  palette.text_color()];
    table_of_colors(fh, &colors, comment)
}

fn series(fh: &mut impl Write, palette: &dyn ColorPalette, n: usize,
          comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = (0..n).map(|i| palette.series_color(i)).collect();
    table_of_colors(fh, &colors, comment)
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n<body>")?;

    table_of_colors(&mut fh, &colors::DEFAULT_SERIES_COLORS,
                    "default series sequence")?;
    table_of_colors(&mut fh, &colors::ALTERNATE_SERIES_COLORS,
                    "alternate series sequence")?;

    roles(&mut fh, &DefaultColorPalette, "default palette roles")?;
    roles(&mut fh, &AlternateColorPalette, "alternate palette roles")?;

    // Past the sequence lengths, to show the wraparound.
    series(&mut fh, &DefaultColorPalette, 12, "default series colors")?;
    series(&mut fh, &AlternateColorPalette, 12, "alternate series colors")?;

    writeln!(fh, "</body>\n</html>")?;
    Ok(())
}
