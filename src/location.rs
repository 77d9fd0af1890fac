//! Address handling: turning `#/<volume>/<book>/<chapter>[/<verses>]` into a
//! [`ScriptureLocation`], resolving it against the tree, and producing the
//! canonical address for a selection.
//!
//! Failure is asymmetric. A malformed volume/book/chapter path rejects the
//! whole address, while a malformed verse token only drops that token.

use std::collections::BTreeSet;

use tracing::trace;

use crate::models::{LocationMatch, ScriptureLocation, TreePath, Volume};

/// First segment reserved for static content pages.
pub const PAGES_PREFIX: &str = "pages";

/// Highest verse number an address may name. Well above the longest chapter
/// in any volume; larger numbers are dropped like any other bad token.
pub const MAX_VERSE: u32 = 1_000;

/// Where an address points: a content page or a scripture location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(String),
    Scripture(ScriptureLocation),
}

/// Lowercase a name and collapse every whitespace run into a single hyphen.
/// Leading and trailing runs become hyphens as well.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

fn segments(fragment: &str) -> Vec<&str> {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Route an address, checking the pages prefix before the scripture grammar.
pub fn parse_route(fragment: &str) -> Option<Route> {
    let parts = segments(fragment);
    if parts.first() == Some(&PAGES_PREFIX) {
        return parts.get(1).map(|slug| Route::Page((*slug).to_string()));
    }
    parse_fragment(fragment).map(Route::Scripture)
}

/// Parse a scripture address. Returns `None` when fewer than three segments
/// remain or the chapter is not a base-10 integer. Segments past the verse
/// list are ignored.
pub fn parse_fragment(fragment: &str) -> Option<ScriptureLocation> {
    let parts = segments(fragment);
    let [volume, book, chapter, rest @ ..] = parts.as_slice() else {
        trace!(fragment, "too few segments");
        return None;
    };

    let Ok(chapter_number) = chapter.parse::<u32>() else {
        trace!(fragment, chapter, "chapter is not a number");
        return None;
    };

    Some(ScriptureLocation {
        volume_name: (*volume).to_string(),
        book_name: (*book).to_string(),
        chapter_number,
        verse_numbers: rest.first().map(|spec| parse_verse_numbers(spec)),
    })
}

/// Expand a verse list such as `1-3,5` into sorted, de-duplicated numbers.
/// Tokens that are not integers, ranges running backwards, and anything past
/// [`MAX_VERSE`] are skipped.
pub fn parse_verse_numbers(spec: &str) -> Vec<u32> {
    let mut verses = BTreeSet::new();

    for token in spec.split(',') {
        if let Some((start, end)) = token.split_once('-') {
            match (start.trim().parse::<u32>(), end.trim().parse::<u32>()) {
                (Ok(start), Ok(end)) if start <= end && end <= MAX_VERSE => {
                    verses.extend(start..=end)
                }
                _ => trace!(token, "skipping invalid verse range"),
            }
        } else {
            match token.trim().parse::<u32>() {
                Ok(verse) if verse <= MAX_VERSE => {
                    verses.insert(verse);
                }
                Ok(_) => trace!(token, "skipping verse past the limit"),
                Err(_) => trace!(token, "skipping invalid verse"),
            }
        }
    }

    verses.into_iter().collect()
}

/// Find the volume, book and chapter named by slugs. Names are compared after
/// slugification and case folding; the chapter must match exactly. Lookup is
/// always by name and number, never by the positional ids.
pub fn resolve<'a>(
    volumes: &'a [Volume],
    volume_slug: &str,
    book_slug: &str,
    chapter_number: u32,
) -> Option<LocationMatch<'a>> {
    let volume_slug = volume_slug.to_lowercase();
    let book_slug = book_slug.to_lowercase();

    let (volume_idx, volume) = volumes
        .iter()
        .enumerate()
        .find(|(_, volume)| slugify(&volume.name) == volume_slug)?;
    let (book_idx, book) = volume
        .books
        .iter()
        .enumerate()
        .find(|(_, book)| slugify(&book.name) == book_slug)?;
    let (chapter_idx, chapter) = book
        .chapters
        .iter()
        .enumerate()
        .find(|(_, chapter)| chapter.number == chapter_number)?;

    Some(LocationMatch {
        volume,
        book,
        chapter,
        path: TreePath {
            volume: volume_idx,
            book: book_idx,
            chapter: chapter_idx,
        },
    })
}

/// Resolve a parsed location. Verse numbers play no part in the lookup.
pub fn resolve_location<'a>(
    volumes: &'a [Volume],
    location: &ScriptureLocation,
) -> Option<LocationMatch<'a>> {
    resolve(
        volumes,
        &location.volume_name,
        &location.book_name,
        location.chapter_number,
    )
}

/// Build the canonical address. Verse numbers are joined in the order given.
pub fn format_fragment(
    volume_name: &str,
    book_name: &str,
    chapter_number: u32,
    verse_numbers: Option<&[u32]>,
) -> String {
    let mut fragment = format!(
        "#/{}/{}/{}",
        slugify(volume_name),
        slugify(book_name),
        chapter_number
    );

    if let Some(verses) = verse_numbers.filter(|verses| !verses.is_empty()) {
        let joined: Vec<String> = verses.iter().map(u32::to_string).collect();
        fragment.push('/');
        fragment.push_str(&joined.join(","));
    }

    fragment
}

/// Address of an existing content page.
pub fn format_page(slug: &str) -> String {
    format!("#/{PAGES_PREFIX}/{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Chapter};

    fn tree() -> Vec<Volume> {
        vec![
            Volume {
                id: 1,
                name: "New Testament".into(),
                books: vec![Book {
                    id: 1,
                    name: "Matthew".into(),
                    chapters: vec![
                        Chapter {
                            id: 1,
                            number: 1,
                            verses: vec!["one".into()],
                        },
                        Chapter {
                            id: 2,
                            number: 5,
                            verses: vec!["a".into(), "b".into(), "c".into()],
                        },
                    ],
                }],
            },
            Volume {
                id: 2,
                name: "Doctrine and Covenants".into(),
                books: vec![Book {
                    id: 1,
                    name: "Doctrine and Covenants".into(),
                    chapters: vec![Chapter {
                        id: 1,
                        number: 76,
                        verses: vec!["vision".into()],
                    }],
                }],
            },
        ]
    }

    mod slug {
        use super::*;

        #[test]
        fn lowercases_and_hyphenates() {
            assert_eq!(slugify("New Testament"), "new-testament");
            assert_eq!(slugify("Doctrine and Covenants"), "doctrine-and-covenants");
        }

        #[test]
        fn collapses_whitespace_runs() {
            assert_eq!(slugify("1  Nephi"), "1-nephi");
            assert_eq!(slugify("Song\tof \n Solomon"), "song-of-solomon");
            assert_eq!(slugify(" Acts"), "-acts");
        }
    }

    mod verses {
        use super::*;

        #[test]
        fn ranges_and_singles() {
            assert_eq!(parse_verse_numbers("1-3,5"), vec![1, 2, 3, 5]);
        }

        #[test]
        fn output_is_ascending() {
            assert_eq!(parse_verse_numbers("5,1-3"), vec![1, 2, 3, 5]);
        }

        #[test]
        fn backwards_range_is_dropped() {
            assert_eq!(parse_verse_numbers("3-1"), Vec::<u32>::new());
        }

        #[test]
        fn bad_token_is_dropped() {
            assert_eq!(parse_verse_numbers("a,2"), vec![2]);
            assert_eq!(parse_verse_numbers("1-x,4,,"), vec![4]);
        }

        #[test]
        fn numbers_past_the_limit_are_dropped() {
            assert_eq!(parse_verse_numbers("1-4294967295,2"), vec![2]);
            assert_eq!(parse_verse_numbers("5000,7"), vec![7]);
            assert_eq!(
                parse_verse_numbers(&format!("{MAX_VERSE}")),
                vec![MAX_VERSE]
            );
        }

        #[test]
        fn oversized_range_keeps_the_location() {
            let location = parse_fragment("#/vol/book/3/1-4294967295").unwrap();
            assert_eq!(location.chapter_number, 3);
            assert_eq!(location.verse_numbers, Some(vec![]));
        }

        #[test]
        fn duplicates_collapse() {
            assert_eq!(parse_verse_numbers("2,1-3,2"), vec![1, 2, 3]);
        }

        #[test]
        fn surrounding_spaces_are_tolerated() {
            assert_eq!(parse_verse_numbers(" 4 , 6 - 7"), vec![4, 6, 7]);
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn full_address() {
            let location = parse_fragment("#/new-testament/matthew/5/3-5,10").unwrap();
            assert_eq!(
                location,
                ScriptureLocation {
                    volume_name: "new-testament".into(),
                    book_name: "matthew".into(),
                    chapter_number: 5,
                    verse_numbers: Some(vec![3, 4, 5, 10]),
                }
            );
        }

        #[test]
        fn hash_is_optional_and_empty_segments_are_ignored() {
            let location = parse_fragment("//new-testament//matthew/5/").unwrap();
            assert_eq!(location.volume_name, "new-testament");
            assert_eq!(location.chapter_number, 5);
            assert_eq!(location.verse_numbers, None);
        }

        #[test]
        fn too_few_segments() {
            assert_eq!(parse_fragment("#/onlyonesegment"), None);
            assert_eq!(parse_fragment("#/vol/book"), None);
            assert_eq!(parse_fragment(""), None);
        }

        #[test]
        fn chapter_must_be_numeric() {
            assert_eq!(parse_fragment("#/vol/book/notanumber"), None);
            assert_eq!(parse_fragment("#/vol/book/-1"), None);
            assert_eq!(parse_fragment("#/vol/book/5abc"), None);
        }

        #[test]
        fn invalid_verse_list_keeps_location() {
            let location = parse_fragment("#/vol/book/3/x-y").unwrap();
            assert_eq!(location.chapter_number, 3);
            assert_eq!(location.verse_numbers, Some(vec![]));
        }
    }

    mod routing {
        use super::*;

        #[test]
        fn pages_prefix_wins() {
            assert_eq!(
                parse_route("#/pages/about"),
                Some(Route::Page("about".into()))
            );
            assert_eq!(
                parse_route("#/pages/about/1"),
                Some(Route::Page("about".into()))
            );
        }

        #[test]
        fn bare_pages_prefix_is_rejected() {
            assert_eq!(parse_route("#/pages"), None);
        }

        #[test]
        fn scripture_falls_through() {
            let route = parse_route("#/new-testament/matthew/1").unwrap();
            assert!(matches!(route, Route::Scripture(ref loc) if loc.book_name == "matthew"));
        }

        #[test]
        fn scripture_parser_knows_nothing_about_pages() {
            let location = parse_fragment("#/pages/about/1").unwrap();
            assert_eq!(location.volume_name, "pages");
            assert!(resolve_location(&tree(), &location).is_none());
        }
    }

    mod resolution {
        use super::*;

        #[test]
        fn matches_case_and_whitespace_insensitively() {
            let volumes = tree();
            let found = resolve(&volumes, "New-Testament", "MATTHEW", 5).unwrap();
            assert_eq!(found.volume.name, "New Testament");
            assert_eq!(found.chapter.number, 5);
            assert_eq!(
                found.path,
                TreePath {
                    volume: 0,
                    book: 0,
                    chapter: 1
                }
            );

            let found = resolve(
                &volumes,
                "doctrine-and-covenants",
                "doctrine-and-covenants",
                76,
            )
            .unwrap();
            assert_eq!(found.book.name, "Doctrine and Covenants");
        }

        #[test]
        fn unknown_pieces_are_absent() {
            let volumes = tree();
            assert!(resolve(&volumes, "nonexistent-volume", "matthew", 1).is_none());
            assert!(resolve(&volumes, "new-testament", "mark", 1).is_none());
            assert!(resolve(&volumes, "new-testament", "matthew", 2).is_none());
        }

        #[test]
        fn book_is_searched_within_matched_volume_only() {
            let volumes = tree();
            assert!(resolve(&volumes, "new-testament", "doctrine-and-covenants", 76).is_none());
        }

        #[test]
        fn positional_ids_are_not_lookup_keys() {
            let volumes = tree();
            // Chapter id 2 has number 5; looking up "2" must miss.
            assert!(resolve(&volumes, "new-testament", "matthew", 2).is_none());
        }
    }

    mod format {
        use super::*;

        #[test]
        fn canonical_chapter_address() {
            assert_eq!(
                format_fragment("New Testament", "Matthew", 5, None),
                "#/new-testament/matthew/5"
            );
        }

        #[test]
        fn verses_are_joined_unsorted() {
            assert_eq!(
                format_fragment("New Testament", "Matthew", 5, Some(&[10, 3, 4][..])),
                "#/new-testament/matthew/5/10,3,4"
            );
        }

        #[test]
        fn empty_verse_list_is_omitted() {
            assert_eq!(
                format_fragment("Old Testament", "Song of Solomon", 2, Some(&[][..])),
                "#/old-testament/song-of-solomon/2"
            );
        }

        #[test]
        fn round_trips_through_parse_and_resolve() {
            let volumes = tree();
            for volume in &volumes {
                for book in &volume.books {
                    for chapter in &book.chapters {
                        let fragment =
                            format_fragment(&volume.name, &book.name, chapter.number, None);
                        let location = parse_fragment(&fragment).unwrap();
                        let found = resolve_location(&volumes, &location).unwrap();
                        assert_eq!(found.volume.name, volume.name);
                        assert_eq!(found.book.name, book.name);
                        assert_eq!(found.chapter.number, chapter.number);
                    }
                }
            }
        }

        #[test]
        fn page_address() {
            assert_eq!(format_page("about"), "#/pages/about");
        }
    }
}
