use std::path::PathBuf;

use eyre::WrapErr;
use tokio::{
    runtime::Runtime,
    sync::{
        oneshot,
        watch::{self, Receiver},
    },
};

use super::{render_posts, style, Handlers, PostsState, PostsView, RemoteData};
use crate::{
    fetch::{Fetch, FetchHook, HttpFetcher, StateSender},
    posts::Post,
    settings::{get_config_file, Settings},
};

pub struct PostsApp<F: Fetch<Output = Vec<Post>> = HttpFetcher<Vec<Post>>> {
    // Declared before `rt` so the running fetch is aborted before the runtime shuts down
    hook: FetchHook<F>,
    rt: Runtime,
    posts: Receiver<PostsState>,
    settings: Settings,
    settings_path: PathBuf,
    url: String,
    url_input: String,
    status_message: Option<String>,
    styled: bool,
}

impl PostsApp {
    pub fn new(settings: Settings) -> eyre::Result<Self> {
        let fetcher = HttpFetcher::new(settings.request_timeout())?;
        Self::with_fetcher(settings, get_config_file(), fetcher)
    }
}

impl<F: Fetch<Output = Vec<Post>>> PostsApp<F> {
    pub fn with_fetcher(
        settings: Settings,
        settings_path: PathBuf,
        fetcher: F,
    ) -> eyre::Result<Self> {
        let rt = Runtime::new().wrap_err("Could not start the async runtime")?;
        let hook = FetchHook::new(fetcher, rt.handle().clone(), settings.fetch_delay());
        Ok(Self {
            hook,
            rt,
            posts: watch::channel(RemoteData::NOT_ASKED).1,
            url: settings.posts_url.clone(),
            url_input: settings.posts_url.clone(),
            settings,
            settings_path,
            status_message: None,
            styled: false,
        })
    }

    /// Called every frame, only starts a fetch when the url changed.
    pub fn ensure_posts_loaded(&mut self) {
        if self.hook.url() == Some(self.url.as_str()) {
            return;
        }
        let (tx, rx) = watch::channel(RemoteData::NOT_ASKED);
        self.posts = rx;
        self.hook.use_fetch(&self.url, StateSender(tx));
    }

    pub fn fetch_input(&mut self) {
        let url = self.url_input.trim();
        if !url.is_empty() && url != self.url {
            tracing::info!(url, "Switching posts url");
            self.url = url.to_string();
            self.status_message = None;
        }
    }

    pub fn save_input(&mut self) {
        let url = self.url_input.trim();
        if url.is_empty() {
            self.status_message = Some("Can not save an empty url".to_string());
            return;
        }
        self.settings.posts_url = url.to_string();
        let res = self.settings.save_to(&self.settings_path);
        self.status_message = Some(match res {
            Ok(()) => format!("Saved settings to {:?}", self.settings_path),
            Err(err) => {
                tracing::error!("Could not save settings: {err:#}");
                format!("Could not save settings: {err}")
            }
        });
    }

    pub fn update_ui(&mut self, ctx: &egui::Context) {
        if !self.styled {
            let mut style: egui::Style = (*ctx.style()).clone();
            style::set_style(&mut style);
            ctx.set_style(style);
            self.styled = true;
        }

        self.ensure_posts_loaded();

        egui::TopBottomPanel::top("Url Panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Url");
                ui.text_edit_singleline(&mut self.url_input);
                if ui.button("Fetch").clicked() {
                    self.fetch_input();
                }
                if ui
                    .button("Save")
                    .on_hover_text("Use this url the next time the app starts")
                    .clicked()
                {
                    self.save_input();
                }
            });
            if let Some(message) = &self.status_message {
                ui.label(message.as_str());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Posts");
            let state = self.posts.borrow();
            render_posts(ui, &PostsView::new(RemoteData::as_ref(&state)));
            if !state.is_done() {
                ui.ctx().request_repaint();
            }
        });
    }
}

#[cfg(feature = "gui")]
impl<F: Fetch<Output = Vec<Post>>> eframe::App for PostsApp<F> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}

#[cfg(feature = "gui")]
pub fn run_ui(settings: Settings, args: &[String]) -> eyre::Result<()> {
    let app = PostsApp::new(settings)?;
    let no_v_sync = args.contains(&"--no-vsync".to_string());
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::Vec2 { x: 800., y: 600. }),
        vsync: !no_v_sync,
        ..Default::default()
    };
    eframe::run_native("Posts", native_options, Box::new(|_cc| Box::new(app)));
    Ok(())
}

/// Fetches the posts once and prints every state to stdout.
pub fn run_no_ui(settings: Settings) -> eyre::Result<()> {
    let rt = Runtime::new().wrap_err("Could not start the async runtime")?;
    let fetcher = HttpFetcher::<Vec<Post>>::new(settings.request_timeout())?;
    let mut hook = FetchHook::new(fetcher, rt.handle().clone(), settings.fetch_delay());

    let (done_tx, done_rx) = oneshot::channel();
    let mut done_tx = Some(done_tx);
    hook.use_fetch(
        &settings.posts_url,
        Handlers {
            on_not_asked: || print_view(&PostsView::new(RemoteData::NOT_ASKED)),
            on_loading: || print_view(&PostsView::new(RemoteData::LOADING)),
            on_done: move |posts: eyre::Result<Vec<Post>>| {
                print_view(&PostsView::new(RemoteData::done(&posts)));
                if let Some(tx) = done_tx.take() {
                    let _ = tx.send(posts.map(|_| ()));
                }
            },
        },
    );

    rt.block_on(done_rx)
        .wrap_err("Fetch ended without a result")?
        .wrap_err_with(|| format!("Could not load posts from {}", settings.posts_url))
}

fn print_view(view: &PostsView) {
    for line in view.lines() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use futures::future::{BoxFuture, FutureExt};

    use super::*;

    #[derive(Clone, Default)]
    struct CountingFetcher {
        calls: Arc<AtomicUsize>,
    }

    impl Fetch for CountingFetcher {
        type Output = Vec<Post>;

        fn fetch(&self, url: &str) -> BoxFuture<'static, eyre::Result<Vec<Post>>> {
            let id = self.calls.fetch_add(1, Ordering::SeqCst) as u32 + 1;
            let post = Post {
                id,
                user_id: 1,
                title: format!("post from {url}"),
                body: String::new(),
            };
            async move { Ok(vec![post]) }.boxed()
        }
    }

    fn settings(url: &str) -> Settings {
        Settings {
            posts_url: url.to_string(),
            fetch_delay_ms: 0,
            request_timeout_secs: 1,
        }
    }

    fn app(url: &str, fetcher: CountingFetcher) -> PostsApp<CountingFetcher> {
        let settings_path = std::env::temp_dir()
            .join(format!("posts-app-{}-{url}.toml", std::process::id()));
        PostsApp::with_fetcher(settings(url), settings_path, fetcher).unwrap()
    }

    fn frame(app: &mut PostsApp<CountingFetcher>, ctx: &egui::Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.update_ui(ctx));
    }

    fn wait_for_posts(app: &PostsApp<CountingFetcher>) -> Vec<String> {
        let mut posts = app.posts.clone();
        app.rt.block_on(async {
            while !posts.borrow().is_done() {
                posts.changed().await.unwrap();
            }
        });
        let state = posts.borrow();
        let lines = PostsView::new(RemoteData::as_ref(&state)).lines();
        lines
    }

    #[test]
    pub fn test_frames_fetch_once() {
        let fetcher = CountingFetcher::default();
        let mut app = app("a", fetcher.clone());
        let ctx = egui::Context::default();

        frame(&mut app, &ctx);
        frame(&mut app, &ctx);
        assert_eq!(wait_for_posts(&app), vec!["post from a"]);
        frame(&mut app, &ctx);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    pub fn test_changing_url_refetches() {
        let fetcher = CountingFetcher::default();
        let mut app = app("a", fetcher.clone());
        let ctx = egui::Context::default();

        frame(&mut app, &ctx);
        assert_eq!(wait_for_posts(&app), vec!["post from a"]);

        app.url_input = " b ".to_string();
        app.fetch_input();
        frame(&mut app, &ctx);
        assert_eq!(wait_for_posts(&app), vec!["post from b"]);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    pub fn test_empty_input_keeps_url() {
        let mut app = app("a", CountingFetcher::default());
        app.url_input = "  ".to_string();
        app.fetch_input();
        assert_eq!(app.url, "a");
    }

    #[test]
    pub fn test_frames_keep_the_state_channel() {
        let mut app = app("keep", CountingFetcher::default());
        let ctx = egui::Context::default();

        frame(&mut app, &ctx);
        let first = app.posts.clone();
        frame(&mut app, &ctx);
        frame(&mut app, &ctx);
        assert!(app.posts.same_channel(&first));
    }

    #[test]
    pub fn test_save_refuses_empty_url() {
        let mut app = app("empty", CountingFetcher::default());
        let _ = std::fs::remove_file(&app.settings_path);
        app.url_input = "   ".to_string();
        app.save_input();

        assert!(!app.settings_path.exists());
        assert_eq!(app.settings.posts_url, "empty");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Can not save an empty url")
        );
    }

    #[test]
    pub fn test_no_ui_failure_keeps_cause() {
        let settings = Settings {
            posts_url: "http://127.0.0.1:1/posts".to_string(),
            fetch_delay_ms: 0,
            request_timeout_secs: 5,
        };
        let err = run_no_ui(settings).unwrap_err();
        let chain: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
        assert_eq!(chain[0], "Could not load posts from http://127.0.0.1:1/posts");
        assert!(chain
            .iter()
            .any(|cause| cause == "Request to http://127.0.0.1:1/posts failed"));
    }

    #[test]
    pub fn test_save_input_writes_settings() {
        let mut app = app("save", CountingFetcher::default());
        app.url_input = "http://localhost/posts".to_string();
        app.save_input();

        let saved = Settings::load(&app.settings_path).unwrap();
        assert_eq!(saved.posts_url, "http://localhost/posts");
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or_default()
            .starts_with("Saved settings"));
    }
}
