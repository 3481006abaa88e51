use periodical_core::{Article, Author, Magazine, ModelError};

fn fixtures() -> (Author, Magazine) {
    (
        Author::new("Carry Bradshaw").expect("valid author"),
        Magazine::new("Vogue", "Fashion").expect("valid magazine"),
    )
}

#[test]
fn article_is_initialized_with_title() {
    let (author, magazine) = fixtures();
    let article =
        Article::new(&author, &magazine, "How to wear a tutu with style").expect("valid article");
    assert_eq!(article.title(), "How to wear a tutu with style");
}

#[test]
fn article_title_is_sealed() {
    let (author, magazine) = fixtures();
    let article =
        Article::new(&author, &magazine, "How to wear a tutu with style").expect("valid article");

    let err = article
        .set_title("New Title")
        .expect_err("title must not be mutable");
    assert_eq!(err, ModelError::ImmutableField { field: "title" });
    assert_eq!(article.title(), "How to wear a tutu with style");
}

#[test]
fn invalid_title_reassignment_reports_the_bad_value_first() {
    let (author, magazine) = fixtures();
    let article =
        Article::new(&author, &magazine, "How to wear a tutu with style").expect("valid article");

    let err = article.set_title("Hi").expect_err("short title must fail");
    assert!(err.is_invalid_argument());
    assert_eq!(article.title(), "How to wear a tutu with style");
}

#[test]
fn article_title_must_be_between_5_and_50_characters() {
    let (author, magazine) = fixtures();

    let err = Article::new(&author, &magazine, "Hi").expect_err("short title must fail");
    assert!(matches!(err, ModelError::InvalidArgument { field: "title", .. }));

    let err = Article::new(
        &author,
        &magazine,
        "This title is way too long and exceeds the maximum allowed characters for an article title",
    )
    .expect_err("long title must fail");
    assert!(matches!(err, ModelError::InvalidArgument { field: "title", .. }));

    Article::new(&author, &magazine, "Fiver").expect("five characters are enough");
    Article::new(&author, &magazine, "x".repeat(50)).expect("fifty characters are allowed");
    assert_eq!(author.articles().len(), 2);
}

#[test]
fn article_has_author_and_magazine() {
    let (author, magazine) = fixtures();
    let article =
        Article::new(&author, &magazine, "How to wear a tutu with style").expect("valid article");

    assert_eq!(article.author(), &author);
    assert_eq!(article.magazine(), &magazine);
    assert_eq!(article.author().name(), "Carry Bradshaw");
    assert_eq!(article.magazine().name(), "Vogue");
}

#[test]
fn article_sees_magazine_rename() {
    let (author, magazine) = fixtures();
    let article =
        Article::new(&author, &magazine, "How to wear a tutu with style").expect("valid article");

    magazine.set_name("New Vogue").expect("valid rename");
    assert_eq!(article.magazine().name(), "New Vogue");
}

#[test]
fn articles_with_same_title_stay_distinct() {
    let (author, magazine) = fixtures();
    let first = Article::new(&author, &magazine, "Dating life in NYC").expect("valid article");
    let second = Article::new(&author, &magazine, "Dating life in NYC").expect("valid article");

    assert_ne!(first, second);
    assert_eq!(magazine.articles().len(), 2);
}
