/// Title used when a filename yields nothing usable.
pub const FALLBACK_TITLE: &str = "Unknown Track";

const TITLE_ARTIST_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub title: String,
    pub artist: Option<String>,
}

/// Derive a title/artist pair from a bare filename.
///
/// The last `.extension` is stripped first (a leading dot is part of the
/// name, not an extension). `"Title - Artist.mp3"` splits on the first
/// `" - "`; anything else becomes the title with no artist.
pub fn parse_file_name(file_name: &str) -> ParsedName {
    if file_name.is_empty() {
        return ParsedName {
            title: FALLBACK_TITLE.to_string(),
            artist: None,
        };
    }

    let stem = match file_name.rfind('.') {
        Some(i) if i > 0 => &file_name[..i],
        _ => file_name,
    };

    if let Some(i) = stem.find(TITLE_ARTIST_SEPARATOR) {
        // Split only when something follows the separator.
        if i > 0 && i + TITLE_ARTIST_SEPARATOR.len() < stem.len() {
            let title = stem[..i].trim();
            let artist = stem[i + TITLE_ARTIST_SEPARATOR.len()..].trim();
            return ParsedName {
                title: non_empty_title(title),
                artist: (!artist.is_empty()).then(|| artist.to_string()),
            };
        }
    }

    ParsedName {
        title: non_empty_title(stem.trim()),
        artist: None,
    }
}

fn non_empty_title(title: &str) -> String {
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(title: &str, artist: Option<&str>) -> ParsedName {
        ParsedName {
            title: title.to_string(),
            artist: artist.map(str::to_string),
        }
    }

    #[test]
    fn splits_title_and_artist_on_separator() {
        assert_eq!(
            parse_file_name("Levitate - Kenya Grace.mp3"),
            parsed("Levitate", Some("Kenya Grace"))
        );
        assert_eq!(
            parse_file_name("  Blue Train  -  Coltrane  .flac"),
            parsed("Blue Train", Some("Coltrane"))
        );
    }

    #[test]
    fn whole_stem_is_title_when_no_separator() {
        assert_eq!(parse_file_name("Levitate.mp3"), parsed("Levitate", None));
        assert_eq!(parse_file_name("no extension"), parsed("no extension", None));
    }

    #[test]
    fn separator_needs_text_on_both_sides() {
        // Nothing after the separator: keep the whole stem.
        assert_eq!(parse_file_name("Title - .mp3"), parsed("Title -", None));
        // Separator at position zero is not a split point.
        assert_eq!(parse_file_name(" - Artist.mp3"), parsed("- Artist", None));
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        assert_eq!(parse_file_name(".hidden"), parsed(".hidden", None));
        assert_eq!(parse_file_name(".hidden.mp3"), parsed(".hidden", None));
    }

    #[test]
    fn empty_input_yields_placeholder() {
        assert_eq!(parse_file_name(""), parsed(FALLBACK_TITLE, None));
    }

    #[test]
    fn blank_stem_yields_placeholder() {
        assert_eq!(parse_file_name("   .mp3"), parsed(FALLBACK_TITLE, None));
    }
}
