use crate::data::{AppSettings, Mood};
use crate::ui::locale::strings;
use anyhow::Result;

pub fn run(settings: &AppSettings) -> Result<()> {
    write_moods(settings, &mut std::io::stdout())
}

pub(crate) fn write_moods<W: std::io::Write>(settings: &AppSettings, out: &mut W) -> Result<()> {
    let s = strings(settings.locale);
    writeln!(out, "Moods")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<4} {:<6} {}", "Key", "Glyph", "Label")?;
    for mood in Mood::ALL {
        writeln!(
            out,
            "  {:<4} {:<6} {}",
            mood.index() + 1,
            mood.glyph(),
            s.mood_label(mood)
        )?;
    }
    writeln!(out, "---")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Locale;

    fn render(settings: &AppSettings) -> String {
        let mut buf = Vec::new();
        write_moods(settings, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_moods_lists_all_glyphs_in_order() {
        let out = render(&AppSettings::default());
        let positions: Vec<_> = Mood::ALL
            .iter()
            .map(|m| out.find(m.glyph()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_write_moods_spanish_labels() {
        let out = render(&AppSettings::default());
        assert!(out.contains("Feliz"));
        assert!(out.contains("Enojado"));
    }

    #[test]
    fn test_write_moods_english_labels() {
        let settings = AppSettings {
            locale: Locale::En,
            ..AppSettings::default()
        };
        let out = render(&settings);
        assert!(out.contains("Happy"));
        assert!(out.contains("  5"));
    }
}
