use eframe::egui;
use egui::{CentralPanel, Context, ViewportBuilder, ViewportCommand};
use rfd::FileDialog;
use crate::{
    core::{
        action::{action_for_key, Action},
        error::{AnnotateError, Result},
        pair_textures::PairTextures,
        persistence::ListKind,
        session::Session,
    },
    i18n::get_text,
    model::{
        config::{load_config, save_config, Config},
        state::{FollowUp, UiMode, ViewState},
    },
    ui::{
        about::render_about_window,
        fonts::install_cjk_font,
        menu::draw_menu,
        modal::ModalAction,
        pair_view::draw_pair_view,
        prompts::draw_prompt,
        settings::render_settings_window,
        status_bar::draw_control_bar,
    },
};

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PairAnnotator",
        options,
        Box::new(|cc| Ok(Box::new(AnnotatorApp::new(cc)))),
    )
}

pub struct AnnotatorApp {
    config: Config,
    /// 设置窗口里正在编辑的配置
    settings_draft: Config,
    session: Option<Session>,
    textures: PairTextures,
    state: ViewState,
    cjk_font_installed: bool,
}

impl AnnotatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config();
        let cjk_font_installed = config.language.needs_cjk_font() && install_cjk_font(&cc.egui_ctx);

        Self {
            settings_draft: config.clone(),
            config,
            session: None,
            textures: PairTextures::new(),
            state: ViewState::new(),
            cjk_font_installed,
        }
    }

    /// 弹出打开对话框并读取列表，取消时返回 NoFileSelected
    fn pick_and_load(&mut self, kind: ListKind) -> Result<Session> {
        let text = get_text(self.config.language);
        let path = FileDialog::new()
            .set_title(text.open_title)
            .set_directory(self.config.dialog_dir())
            .pick_file()
            .ok_or(AnnotateError::NoFileSelected)?;
        self.config.remember_dir(&path);
        kind.load(&path)
    }

    /// 启动阶段：一直选到合法列表为止，或者用户确认退出
    fn startup_pick(&mut self, ctx: &Context) {
        self.state.pick_requested = false;
        match self.pick_and_load(ListKind::Pairs) {
            Ok(session) => self.install_session(ctx, session),
            Err(e) => {
                tracing::warn!(error = %e, "initial pair list rejected");
                self.state.startup_failed(&e, get_text(self.config.language));
            }
        }
    }

    /// 标注途中换列表，失败时保留当前会话
    fn reopen(&mut self, ctx: &Context, kind: ListKind) {
        match self.pick_and_load(kind) {
            Ok(session) => self.install_session(ctx, session),
            Err(AnnotateError::NoFileSelected) => {}
            Err(e) => {
                tracing::warn!(error = %e, ?kind, "list rejected");
                let text = get_text(self.config.language);
                self.state.toast_manager.error(text.describe_error(&e));
            }
        }
    }

    fn install_session(&mut self, ctx: &Context, session: Session) {
        self.textures.clear();
        self.session = Some(session);
        save_config(&self.config);
        self.refresh(ctx);
    }

    /// 每次操作后重新读取当前记录（越界时在这里拉回），并加载图片
    fn refresh(&mut self, ctx: &Context) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let clamp = {
            let (_, clamp) = session.current();
            clamp
        };
        self.state.cursor_clamped(clamp);

        let idx = session.cursor() as usize;
        let records = session.records();
        self.textures.request_pair(ctx, &records[idx], records.get(idx + 1));
    }

    fn apply(&mut self, ctx: &Context, action: Action) {
        crate::dev_info!("action: {:?}", action);
        match action {
            Action::OpenList => return self.reopen(ctx, ListKind::Pairs),
            Action::OpenAnnotations => return self.reopen(ctx, ListKind::Annotated),
            Action::Save => return self.save(),
            _ => {}
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match action {
            Action::Mark(state) => session.annotate(state),
            Action::Next => session.advance(1),
            Action::Prev => session.advance(-1),
            Action::Swap => session.swap_current(),
            Action::ScrubTo(index) => session.scrub_to(index),
            Action::Save | Action::OpenList | Action::OpenAnnotations => {}
        }
        self.refresh(ctx);
    }

    fn save(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let text = get_text(self.config.language);
        let Some(path) = FileDialog::new()
            .set_title(text.save_title)
            .set_directory(self.config.dialog_dir())
            .save_file()
        else {
            self.state.toast_manager.info(text.save_no_name);
            return;
        };

        match session.save(&path, self.config.state_format) {
            Ok(()) => {
                self.state.toast_manager.success(text.save_success);
                self.config.remember_dir(&path);
                save_config(&self.config);
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                self.state.toast_manager.error(text.describe_error(&e));
            }
        }
    }

    /// 键盘快捷键，弹窗打开时不响应
    fn handle_inputs(&mut self, ctx: &Context) {
        if self.state.is_blocked() || self.session.is_none() {
            return;
        }
        let actions: Vec<Action> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, modifiers, .. } => {
                        action_for_key(*key, *modifiers)
                    }
                    _ => None,
                })
                .collect()
        });
        for action in actions {
            self.apply(ctx, action);
            // 一次按键可能触发提示框，后面的按键不再处理
            if self.state.is_blocked() {
                break;
            }
        }
    }

    fn render_prompt(&mut self, ctx: &Context) {
        let Some(prompt) = &self.state.prompt else {
            return;
        };
        let Some(outcome) = draw_prompt(ctx, prompt, get_text(self.config.language)) else {
            return;
        };
        match self.state.resolve_prompt(outcome, self.session.is_some()) {
            FollowUp::Exit => {
                tracing::info!("user chose to exit without a pair list");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            FollowUp::PickAgain | FollowUp::Nothing => {}
        }
    }

    fn render_windows(&mut self, ctx: &Context) {
        let text = get_text(self.config.language);
        match self.state.ui_mode {
            UiMode::Settings => {
                let mut open = true;
                let action = render_settings_window(ctx, &mut open, self.config.language, &mut self.settings_draft);
                if action == ModalAction::Apply {
                    self.apply_settings(ctx);
                }
                if !open {
                    self.settings_draft = self.config.clone();
                    self.state.ui_mode = UiMode::Normal;
                }
            }
            UiMode::About => {
                let mut open = true;
                render_about_window(ctx, &mut open, text);
                if !open {
                    self.state.ui_mode = UiMode::Normal;
                }
            }
            UiMode::Normal => {}
        }
    }

    fn apply_settings(&mut self, ctx: &Context) {
        // 目录以当前配置为准，设置窗口不编辑它
        self.settings_draft.last_dir = self.config.last_dir.clone();
        self.config = self.settings_draft.clone();
        if self.config.language.needs_cjk_font() && !self.cjk_font_installed {
            self.cjk_font_installed = install_cjk_font(ctx);
        }
        save_config(&self.config);
        tracing::info!(language = ?self.config.language, format = ?self.config.state_format, "settings applied");
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        // 1. 后台解码结果
        if self.textures.process_load_results() {
            ctx.request_repaint();
        }

        // 2. 启动时还没有列表，弹出打开对话框
        if self.session.is_none() && self.state.prompt.is_none() && self.state.pick_requested {
            self.startup_pick(ctx);
        }

        // 3. 快捷键
        self.handle_inputs(ctx);

        let text = get_text(self.config.language);
        let mut actions = Vec::new();

        // 4. 菜单栏
        let has_session = self.session.is_some();
        if let Some(action) = draw_menu(ctx, &mut self.state.ui_mode, text, has_session) {
            actions.push(action);
        }

        // 5. 底部操作栏 + 主画布
        match self.session.as_ref() {
            Some(session) => {
                if let Some(action) = draw_control_bar(ctx, session, text) {
                    actions.push(action);
                }
                let idx = session.cursor().clamp(0, session.len() as isize - 1) as usize;
                draw_pair_view(ctx, &session.records()[idx], &mut self.textures, text);
            }
            None => {
                CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| ui.label(text.open_title));
                });
            }
        }

        if !self.state.is_blocked() {
            for action in actions {
                self.apply(ctx, action);
            }
        }

        // 6. 弹窗
        self.render_prompt(ctx);
        self.render_windows(ctx);
        self.state.toast_system.update(ctx);
    }
}
