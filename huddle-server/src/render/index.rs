//! The root listing page

use maud::{html, Markup, DOCTYPE};

use crate::models::{PostWithOwner, User};

const API_ENDPOINTS: &[(&str, Option<&str>, &str)] = &[
    ("GET /api/users", Some("/api/users"), "List all users"),
    ("GET /api/posts", Some("/api/posts"), "List all posts"),
    ("GET /api/users/{id}", None, "Get user details"),
    ("GET /api/posts/{id}", None, "Get post details"),
    ("POST /users", None, "Add a new user"),
    ("POST /posts", None, "Add a new post"),
    ("PATCH /users/{id}", None, "Update user details"),
    ("PATCH /posts/{id}", None, "Update post details"),
    ("DELETE /users/{id}", None, "Delete a user"),
    ("DELETE /posts/{id}", None, "Delete a post"),
];

/// The root page: API index, create forms and both listings.
pub fn index_page(users: &[User], posts: &[PostWithOwner]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Sports Community" }
            }
            body {
                h1 { "Sports Community" }

                h2 { "API Endpoints" }
                ul {
                    @for (label, href, what) in API_ENDPOINTS {
                        li {
                            @if let Some(href) = href {
                                a href=(href) { (label) }
                            } @else {
                                (label)
                            }
                            " - " (what)
                        }
                    }
                }

                h2 { "Users" }
                form method="POST" action="/users" {
                    input type="text" name="firstName" placeholder="First Name" required;
                    input type="text" name="lastName" placeholder="Last Name" required;
                    input type="number" name="age" placeholder="Age" required;
                    input type="email" name="email" placeholder="Email" required;
                    input type="checkbox" name="is_admin";
                    " Admin"
                    button type="submit" { "Create User" }
                }
                ul {
                    @for user in users {
                        (user_item(user))
                    }
                }

                h2 { "Posts" }
                form method="POST" action="/posts" {
                    input type="text" name="title" placeholder="Title" required;
                    textarea name="content" placeholder="Content" required {}
                    select name="user" required {
                        option value="" { "Select User" }
                        @for u in users {
                            option value=(u.id.to_string()) { (u.full_name()) }
                        }
                    }
                    button type="submit" { "Create Post" }
                }
                ul {
                    @for post in posts {
                        (post_item(post))
                    }
                }
            }
        }
    }
}

fn user_item(user: &User) -> Markup {
    html! {
        li {
            "ID: " (user.id.to_string()) " " (user.first_name) " " (user.last_name)
            " (" (user.email) ") - Age: " (user.age) " Admin? " (user.is_admin.to_string())
            (row_actions("users", &user.id.to_string()))
        }
    }
}

fn post_item(post: &PostWithOwner) -> Markup {
    html! {
        li {
            strong { (post.title) } ": " (post.content) " by " (post.owner_name())
            (row_actions("posts", &post.id.to_string()))
        }
    }
}

/// Delete (via method override) and edit buttons for one row.
fn row_actions(collection: &str, id: &str) -> Markup {
    html! {
        form method="POST" action={ "/" (collection) "/" (id) "?_method=DELETE" } style="display:inline;" {
            button type="submit" { "Delete" }
        }
        form method="GET" action={ "/" (collection) "/" (id) "/edit" } style="display:inline;" {
            button type="submit" { "Edit" }
        }
    }
}
