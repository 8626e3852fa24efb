use bulkins::{FieldDefault, FieldRole, FieldTy, Record, Value};
use jiff::Timestamp;
use std_util::prelude::*;

#[derive(Debug, Clone, Default)]
struct Author;

#[derive(Debug, Clone, Default)]
struct Comment;

#[derive(Debug, Clone, Default, Record)]
struct BlogPost {
    #[key]
    #[auto(increment)]
    id: i64,

    #[column("post_title")]
    title: String,

    #[default_expr("'draft'")]
    status: String,

    #[belongs_to]
    author: Option<Author>,

    author_id: i64,

    #[has_many]
    comments: Vec<Comment>,

    #[skip]
    cached_html: String,

    rating: Option<f64>,

    created_at: Timestamp,

    #[updated_at]
    edited: Timestamp,
}

#[test]
fn table_name_defaults_to_plural_snake_case() {
    let post = BlogPost::default();
    assert_eq!(post.table_name(), "blog_posts");
    assert_eq!(post.model().name, "BlogPost");
}

#[test]
fn field_table() {
    let post = BlogPost::default();
    let model = post.model();

    let names: Vec<_> = model.fields.iter().map(|f| &*f.name).collect();
    assert_eq!(
        names,
        [
            "id",
            "title",
            "status",
            "author",
            "author_id",
            "comments",
            "cached_html",
            "rating",
            "created_at",
            "edited",
        ]
    );

    let id = model.field_by_name("id").unwrap();
    assert!(id.primary_key);
    assert_eq!(id.default, Some(FieldDefault::AutoIncrement));
    assert!(!id.has_declared_default());

    assert_eq!(model.field_by_name("title").unwrap().storage_name, "post_title");

    let status = model.field_by_name("status").unwrap();
    assert_eq!(status.default, Some(FieldDefault::Declared("'draft'".into())));
    assert!(status.has_declared_default());

    assert_eq!(model.field_by_name("author").unwrap().ty, FieldTy::ForeignKey);
    assert_eq!(model.field_by_name("author_id").unwrap().ty, FieldTy::Column);
    assert_eq!(model.field_by_name("comments").unwrap().ty, FieldTy::Relation);
    assert!(model.field_by_name("cached_html").unwrap().ignored);

    assert_eq!(model.field_by_name("created_at").unwrap().role, FieldRole::CreatedAt);
    assert_eq!(model.field_by_name("edited").unwrap().role, FieldRole::UpdatedAt);
    assert_eq!(model.field_by_name("rating").unwrap().role, FieldRole::Plain);
}

#[test]
fn model_is_built_once() {
    let a = BlogPost::default();
    let b = BlogPost::default();

    assert!(std::ptr::eq(a.model(), b.model()));
}

#[test]
fn field_values_follow_the_field_table() {
    let post = BlogPost {
        id: 4,
        title: "Hello".to_string(),
        author_id: 9,
        cached_html: "<p>Hello</p>".to_string(),
        rating: Some(4.5),
        ..BlogPost::default()
    };

    let values = assert_ok!(post.field_values());

    assert_eq!(
        values,
        [
            Some(Value::I64(4)),
            Some(Value::from("Hello")),
            Some(Value::from("")),
            Some(Value::Null),
            Some(Value::I64(9)),
            Some(Value::Null),
            Some(Value::Null),
            Some(Value::F64(4.5)),
            Some(Value::Timestamp(Timestamp::UNIX_EPOCH)),
            Some(Value::Timestamp(Timestamp::UNIX_EPOCH)),
        ]
    );
}

#[test]
fn unset_optional_is_null() {
    let post = BlogPost::default();
    let values = assert_ok!(post.field_values());
    assert_eq!(values[7], Some(Value::Null));
}
