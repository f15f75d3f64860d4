//! Edit forms for a single user or post

use maud::{html, Markup};

use crate::models::{PostWithOwner, User};

/// Edit form for one user, pre-filled with its current values.
pub fn user_edit_form(user: &User) -> Markup {
    let action = format!("/users/{}?_method=PATCH", user.id);

    html! {
        form method="POST" action=(action) {
            input type="text" name="firstName" value=(user.first_name) required;
            input type="text" name="lastName" value=(user.last_name) required;
            input type="number" name="age" value=(user.age) required;
            input type="email" name="email" value=(user.email) required;
            button type="submit" { "Update User" }
        }
        a href="/" { "Back" }
    }
}

/// Edit form for one post with an owner selector over `users`.
///
/// The current owner is pre-selected when it still exists.
pub fn post_edit_form(post: &PostWithOwner, users: &[User]) -> Markup {
    let action = format!("/posts/{}?_method=PATCH", post.id);

    html! {
        form method="POST" action=(action) {
            input type="text" name="title" value=(post.title) required;
            textarea name="content" required { (post.content) }
            select name="user" required {
                @for u in users {
                    option value=(u.id.to_string()) selected[u.id == post.user_id] { (u.full_name()) }
                }
            }
            button type="submit" { "Update Post" }
        }
        a href="/" { "Back" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(first: &str) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: first.into(),
            last_name: "Lee".into(),
            age: 19,
            email: "lee@club.org".into(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_form_prefills_values() {
        let u = user("Sam");
        let html = user_edit_form(&u).into_string();
        assert!(html.contains(&format!(r#"action="/users/{}?_method=PATCH""#, u.id)));
        assert!(html.contains(r#"name="firstName" value="Sam""#));
        assert!(html.contains(r#"name="age" value="19""#));
        assert!(html.contains(r#"name="email" value="lee@club.org""#));
    }

    #[test]
    fn post_form_selects_current_owner() {
        let sam = user("Sam");
        let kim = user("Kim");
        let post = PostWithOwner {
            id: Uuid::new_v4(),
            title: "Relay".into(),
            content: "Sign up".into(),
            user_id: kim.id,
            user: None,
        };

        let html = post_edit_form(&post, &[sam.clone(), kim.clone()]).into_string();
        assert!(html.contains(&format!(r#"<option value="{}">Sam Lee</option>"#, sam.id)));
        assert!(html.contains(&format!(r#"<option value="{}" selected>Kim Lee</option>"#, kim.id)));
        assert!(html.contains("<textarea name=\"content\" required>Sign up</textarea>"));
    }

    #[test]
    fn orphaned_post_selects_nothing() {
        let post = PostWithOwner {
            id: Uuid::new_v4(),
            title: "Relay".into(),
            content: "Sign up".into(),
            user_id: Uuid::new_v4(),
            user: None,
        };
        let html = post_edit_form(&post, &[user("Sam")]).into_string();
        assert!(!html.contains("selected"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut u = user("Sam");
        u.email = "a&b<c>@club.org".into();
        let html = user_edit_form(&u).into_string();
        assert!(html.contains(r#"value="a&amp;b&lt;c&gt;@club.org""#));
    }
}
