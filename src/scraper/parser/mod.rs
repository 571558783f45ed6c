mod patterns;
mod title;

pub use patterns::ForcedType;
pub use title::{ParsedQuery, Parser};

#[cfg(test)]
mod test {
    use crate::scraper::parser::{ForcedType, Parser};

    #[test]
    fn test_normalize_release_name() {
        let query = Parser::normalize("Stranger.Things.S04E01.1080p.WEB-DL.x265-Group");

        assert_eq!(query.clean_title, "Stranger Things");
        assert_eq!(query.season_number, Some(4));
        assert_eq!(query.year, None);
        assert_eq!(query.forced_type, ForcedType::Unspecified);
    }

    #[test]
    fn test_normalize_year_and_season() {
        let query = Parser::normalize("Show Name 2016 S04");

        assert_eq!(query.clean_title, "Show Name");
        assert_eq!(query.year, Some(2016));
        assert_eq!(query.season_number, Some(4));
    }

    #[test]
    fn test_five_digit_run_is_not_a_year() {
        let query = Parser::normalize("Show Name 20164");

        assert_eq!(query.year, None);
        assert_eq!(query.clean_title, "Show Name 20164");
    }

    #[test]
    fn test_season_takes_precedence_over_episode() {
        let query = Parser::normalize("Stranger.Things.S04E01.2016");

        assert_eq!(query.season_number, Some(4));
        assert_eq!(query.year, Some(2016));
        assert_eq!(query.clean_title, "Stranger Things");

        let tokens: Vec<&str> = query.clean_title.split_whitespace().collect();
        assert!(!tokens.contains(&"04"));
        assert!(!tokens.contains(&"2016"));
    }

    #[test]
    fn test_multi_episode_release() {
        let query = Parser::normalize("Show.S01E01E02.720p");

        assert_eq!(query.season_number, Some(1));
        assert_eq!(query.clean_title, "Show");

        let query = Parser::normalize("Show.S01E01-E02.720p");
        assert_eq!(query.season_number, Some(1));
        assert_eq!(query.clean_title, "Show");
    }

    #[test]
    fn test_year_like_season_is_not_a_season() {
        let query = Parser::normalize("Show S2024");

        assert_eq!(query.season_number, None);
        assert_eq!(query.year, None);
        assert_eq!(query.clean_title, "Show S2024");
    }

    #[test]
    fn test_forced_type_is_removed() {
        let query = Parser::normalize("Title (TV) 2020");

        assert_eq!(query.forced_type, ForcedType::Tv);
        assert_eq!(query.year, Some(2020));
        assert_eq!(query.clean_title, "Title");
        assert!(!query.clean_title.split_whitespace().any(|t| t == "TV"));
    }

    #[test]
    fn test_forced_type_aliases() {
        assert_eq!(
            Parser::normalize("Dune Part Two (Movie) 2024").forced_type,
            ForcedType::Movie
        );
        assert_eq!(
            Parser::normalize("Heat (film)").forced_type,
            ForcedType::Movie
        );
        assert_eq!(
            Parser::normalize("The Bear (Series) S02").forced_type,
            ForcedType::Tv
        );
    }

    #[test]
    fn test_forced_type_with_parenthesized_year() {
        let query = Parser::normalize("Stranger Things S04 (2016) (TV)");

        assert_eq!(query.forced_type, ForcedType::Tv);
        assert_eq!(query.year, Some(2016));
        assert_eq!(query.season_number, Some(4));
        assert_eq!(query.clean_title, "Stranger Things");
    }

    #[test]
    fn test_season_word_form() {
        let query = Parser::normalize("The.Office.Season.3.Complete.720p");

        assert_eq!(query.season_number, Some(3));
        assert_eq!(query.clean_title, "The Office");

        let query = Parser::normalize("Dark season-02 (Series)");
        assert_eq!(query.season_number, Some(2));
        assert_eq!(query.clean_title, "Dark");
    }

    #[test]
    fn test_season_volume_suffix_is_discarded() {
        let query = Parser::normalize("Attack on Titan S04V2 Dual Audio");

        assert_eq!(query.season_number, Some(4));
        assert_eq!(query.clean_title, "Attack on Titan");

        let query = Parser::normalize("Attack on Titan S03V");
        assert_eq!(query.season_number, Some(3));
        assert_eq!(query.clean_title, "Attack on Titan");
    }

    #[test]
    fn test_episode_and_part_markers() {
        assert_eq!(Parser::normalize("Show.Name.E05.720p").clean_title, "Show Name");
        assert_eq!(Parser::normalize("Show Name Episode 12").clean_title, "Show Name");
        assert_eq!(Parser::normalize("Show Name Ep 3").clean_title, "Show Name");
        assert_eq!(
            Parser::normalize("Harry.Potter.Part.2.2011").clean_title,
            "Harry Potter"
        );
    }

    #[test]
    fn test_noise_tokens_are_stripped() {
        let query = Parser::normalize("Pushpa 2021 Hindi Dual Audio 720p HDRip x264 AAC");
        assert_eq!(query.clean_title, "Pushpa");
        assert_eq!(query.year, Some(2021));

        let query = Parser::normalize("Inception.2010.1080p.BluRay.DDP5.1.x264-YIFY");
        assert_eq!(query.clean_title, "Inception");
    }

    #[test]
    fn test_title_words_survive_before_release_markers() {
        for (raw, title) in [
            ("Russian.Doll.S01.1080p", "Russian Doll"),
            ("The.Italian.Job.2003.1080p", "The Italian Job"),
            ("The.French.Dispatch.2021", "The French Dispatch"),
            ("The.Limited.2019", "The Limited"),
            ("Opus.2025.1080p", "Opus"),
            ("Hybrid.2007.720p", "Hybrid"),
            ("The Complete Works", "The Complete Works"),
        ] {
            assert_eq!(Parser::normalize(raw).clean_title, title, "raw: {raw}");
        }
    }

    #[test]
    fn test_qualifiers_after_release_markers_are_stripped() {
        let query = Parser::normalize("Heat.1995.Remastered.Extended.Hybrid.1080p.German.DL");
        assert_eq!(query.clean_title, "Heat");
        assert_eq!(query.year, Some(1995));

        let query = Parser::normalize("Dark.S01.Complete.German.Multi.720p.NF.WEB");
        assert_eq!(query.clean_title, "Dark");
        assert_eq!(query.season_number, Some(1));
    }

    #[test]
    fn test_brackets_are_stripped() {
        let query = Parser::normalize("[SubsPlease] Frieren (2023) [1080p]");

        assert_eq!(query.clean_title, "Frieren");
        assert_eq!(query.year, Some(2023));
    }

    #[test]
    fn test_unicode_titles_survive() {
        let query = Parser::normalize("葬送的芙莉莲 S01 1080p");

        assert_eq!(query.clean_title, "葬送的芙莉莲");
        assert_eq!(query.season_number, Some(1));
    }

    #[test]
    fn test_slashes_become_spaces() {
        assert_eq!(Parser::normalize("AC/DC Live").clean_title, "AC DC Live");
    }

    #[test]
    fn test_clean_title_is_never_empty() {
        for raw in ["", "   ", "!!!", "(TV)", "[1080p]", "...", "----", "()[]"] {
            let query = Parser::normalize(raw);
            assert!(!query.clean_title.is_empty(), "empty title for {raw:?}");
        }
    }

    #[test]
    fn test_degenerate_input_falls_back_to_raw() {
        assert_eq!(Parser::normalize("(TV)").clean_title, "TV");
        assert_eq!(Parser::normalize("[1080p]").clean_title, "1080p");
        assert_eq!(Parser::normalize("...").clean_title, "...");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = "Stranger.Things.S04E01.1080p.WEB-DL.x265-Group (TV)";
        assert_eq!(Parser::normalize(raw), Parser::normalize(raw));
    }
}
