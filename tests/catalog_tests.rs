//! Catalog behavior tests
//!
//! Exercises the public catalog API the way a presentation layer would:
//! seed, add, remove and search, checking order and case rules.

use book_catalog::{Book, BookCatalog, BookForm, SearchField};

fn titles(books: &[Book]) -> Vec<String> {
    books.iter().map(|b| b.title().to_string()).collect()
}

#[test]
fn test_seeded_catalog_titles() {
    let catalog = BookCatalog::with_seed();
    assert_eq!(
        titles(&catalog.all()),
        vec![
            "Dune",
            "One Hundred Years of Solitude",
            "And Then There Were None",
            "Harry Potter"
        ]
    );
}

#[test]
fn test_adds_follow_seeded_books_in_order() {
    let mut catalog = BookCatalog::new();
    catalog.seed();
    for (i, title) in ["Zeta", "Alpha", "Mu"].iter().enumerate() {
        catalog.add(Book::new(*title, "Author", "Genre", 2000 + i as i32));
    }

    let all = catalog.all();
    assert_eq!(all.len(), 7);
    assert_eq!(titles(&all[4..]), vec!["Zeta", "Alpha", "Mu"]);
}

#[test]
fn test_genre_search_is_exact_and_case_insensitive() {
    let catalog = BookCatalog::with_seed();

    let results = catalog.search_by_genre("mystery");
    assert_eq!(
        titles(&results),
        vec!["And Then There Were None", "Harry Potter"]
    );
    assert_eq!(catalog.search_by_genre("Mystery"), results);

    // Substring of a compound genre is not a match
    assert!(catalog.search_by_genre("Magical Realism").is_empty());
    assert!(catalog.search_by_genre("Fiction").is_empty());
    assert_eq!(catalog.search_by_genre("magical realism, literary fiction").len(), 1);
}

#[test]
fn test_title_search_is_substring() {
    let catalog = BookCatalog::with_seed();
    assert_eq!(catalog.search_by_title(""), catalog.all());
    assert_eq!(
        titles(&catalog.search_by_title("THE")),
        vec!["And Then There Were None"]
    );
    assert_eq!(
        titles(&catalog.search_by_title("o")),
        vec![
            "One Hundred Years of Solitude",
            "And Then There Were None",
            "Harry Potter"
        ]
    );
}

#[test]
fn test_remove_dune_after_seed() {
    let mut catalog = BookCatalog::with_seed();
    assert!(catalog.remove("dune"));

    let all = catalog.all();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|b| !b.title().eq_ignore_ascii_case("dune")));
}

#[test]
fn test_remove_nonexistent_leaves_catalog_unchanged() {
    let mut catalog = BookCatalog::with_seed();
    let before = catalog.all();
    assert!(!catalog.remove("nonexistent"));
    assert_eq!(catalog.all(), before);
}

#[test]
fn test_add_then_search_by_author() {
    let mut catalog = BookCatalog::with_seed();
    catalog.add(Book::new("Foo", "Bar", "SciFi", 2020));

    let results = catalog.search_by_author("bar");
    assert_eq!(results, vec![Book::new("Foo", "Bar", "SciFi", 2020)]);
}

#[test]
fn test_search_any_matches_merged_screen() {
    let catalog = BookCatalog::with_seed();
    let merged = catalog.search(SearchField::Any, "dune");
    // Title hit only; no author or genre contains/equals "dune"
    assert_eq!(titles(&merged), vec!["Dune"]);
}

#[test]
fn test_form_to_catalog() {
    let mut catalog = BookCatalog::new();

    let book = BookForm::new("Foo", "Bar", "SciFi", "2020").into_book().unwrap();
    catalog.add(book);

    assert!(BookForm::new("Foo", "Bar", "SciFi", "20x0").into_book().is_err());
    assert_eq!(catalog.len(), 1);
}
