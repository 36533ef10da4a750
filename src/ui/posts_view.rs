use egui::ScrollArea;

use super::{Handlers, RemoteData};
use crate::posts::Post;

pub type PostsState = RemoteData<eyre::Result<Vec<Post>>>;

/// What the posts page shows for a given state.
#[derive(Debug, PartialEq, Eq)]
pub enum PostsView<'a> {
    NotAsked,
    Loading,
    Posts(&'a [Post]),
    Failed(String),
}

impl<'a> PostsView<'a> {
    pub fn new(state: RemoteData<&'a eyre::Result<Vec<Post>>>) -> Self {
        state.fold(Handlers {
            on_not_asked: || PostsView::NotAsked,
            on_loading: || PostsView::Loading,
            on_done: |posts: &'a eyre::Result<Vec<Post>>| match posts {
                Ok(posts) => PostsView::Posts(posts),
                Err(err) => PostsView::Failed(format!("{err:#}")),
            },
        })
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            PostsView::NotAsked => vec!["Not Asked".to_string()],
            PostsView::Loading => vec!["Loading...".to_string()],
            PostsView::Posts(posts) if posts.is_empty() => vec!["No posts".to_string()],
            PostsView::Posts(posts) => posts.iter().map(|p| p.title.clone()).collect(),
            PostsView::Failed(err) => vec![format!("Failed to load posts: {err}")],
        }
    }
}

pub fn render_posts(ui: &mut egui::Ui, view: &PostsView) {
    match view {
        PostsView::NotAsked => {
            ui.label("Not Asked");
        }
        PostsView::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        PostsView::Posts(posts) => {
            if posts.is_empty() {
                ui.label("No posts");
            }
            ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for post in posts.iter() {
                        ui.label(post.title.as_str())
                            .on_hover_text(post.body.as_str());
                    }
                });
        }
        PostsView::Failed(err) => {
            ui.label("Failed to load posts")
                .on_hover_text(format!("Error message: {err}"));
        }
    }
}
