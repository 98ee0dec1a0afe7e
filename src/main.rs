use anyhow::Context;
use clap::Parser;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, EventControllerKey, EventControllerMotion, Label, Overlay};
use gtklock_powerbar::config;
use gtklock_powerbar::core::LockModule;
use gtklock_powerbar::{
    GlibLauncher, GtkPowerbar, GtkToolkit, LockHost, LockWindow, ModuleInfo, Powerbar,
    PowerbarConfig, WindowId,
};
use log::{debug, error, info};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

const APP_ID: &str = "com.github.gtklock_powerbar.preview";

/// Module ABI version this preview host speaks
const HOST_MAJOR_VERSION: u32 = 4;
const HOST_MINOR_VERSION: u32 = 0;

/// powerbar-preview - Run the powerbar module in a stand-in lock screen
#[derive(Parser, Debug, Clone)]
#[command(name = "powerbar-preview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file with a [powerbar] group (default: $XDG_CONFIG_HOME/gtklock/config.ini)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of lock windows to open
    #[arg(short = 'n', long = "windows", value_name = "N", default_value = "1")]
    windows: u32,

    /// Seconds without input before the UI is hidden (0 disables)
    #[arg(short = 'i', long = "idle-timeout", value_name = "SECONDS", default_value = "0")]
    idle_timeout: u64,

    /// Start with the UI hidden
    #[arg(long = "start-hidden")]
    start_hidden: bool,

    /// Print the effective powerbar options as JSON and exit
    #[arg(long = "dump-config")]
    dump_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

impl Cli {
    /// Config file to hand to the module, if one exists
    fn config_file(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.config {
            return Some(path.clone());
        }
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("gtklock").join("config.ini"))
            .filter(|path| path.exists())
    }
}

/// Host state the module can query
struct PreviewHost {
    hidden: Cell<bool>,
    focused: Cell<Option<WindowId>>,
    config: Option<PathBuf>,
}

impl LockHost for PreviewHost {
    fn is_hidden(&self) -> bool {
        self.hidden.get()
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.focused.get()
    }

    fn config_file(&self) -> Option<PathBuf> {
        self.config.clone()
    }
}

/// The stand-in lock screen: host state, module and open windows
struct Preview {
    host: PreviewHost,
    module: RefCell<GtkPowerbar>,
    windows: RefCell<HashMap<WindowId, LockWindow<Overlay>>>,
    last_activity: Cell<Instant>,
}

impl Preview {
    fn focus(&self, id: WindowId) {
        let Some(window) = self.windows.borrow().get(&id).cloned() else {
            return;
        };
        let old = self
            .host
            .focused
            .replace(Some(id))
            .and_then(|old| self.windows.borrow().get(&old).cloned());
        debug!("Focus moved to {}", id);
        self.module
            .borrow_mut()
            .on_focus_change(&self.host, &window, old.as_ref());
    }

    fn close(&self, id: WindowId) {
        self.module.borrow_mut().on_window_destroy(&self.host, id);
        self.windows.borrow_mut().remove(&id);
        if self.host.focused.get() == Some(id) {
            self.host.focused.set(None);
        }
    }

    /// User input: reset the idle timer and bring the UI back
    fn activity(&self) {
        self.last_activity.set(Instant::now());
        if self.host.hidden.replace(false) {
            debug!("Input received, showing UI");
            self.module.borrow_mut().on_idle_show(&self.host);
        }
    }

    fn check_idle(&self, timeout: Duration) {
        if !self.host.hidden.get() && self.last_activity.get().elapsed() >= timeout {
            debug!("Idle for {:?}, hiding UI", timeout);
            self.host.hidden.set(true);
            self.module.borrow_mut().on_idle_hide(&self.host);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.dump_config {
        let options = match cli.config_file() {
            Some(path) => config::load_from_path(&path)?,
            None => PowerbarConfig::default(),
        };
        let json = serde_json::to_string_pretty(&options).context("Failed to serialize options")?;
        println!("{}", json);
        return Ok(());
    }

    info!("Starting powerbar-preview v{}", env!("CARGO_PKG_VERSION"));

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, &cli));

    // Arguments were already parsed by clap
    app.run_with_args(&["powerbar-preview"]);
    Ok(())
}

fn build_ui(app: &Application, cli: &Cli) {
    let module: GtkPowerbar = Powerbar::new(GtkToolkit, Rc::new(GlibLauncher));

    let module_info: ModuleInfo = module.info();
    if !module_info.is_compatible(HOST_MAJOR_VERSION, HOST_MINOR_VERSION) {
        error!(
            "Module {} {}.{} is incompatible with host {}.{}",
            module_info.name,
            module_info.major_version,
            module_info.minor_version,
            HOST_MAJOR_VERSION,
            HOST_MINOR_VERSION
        );
        return;
    }

    let preview = Rc::new(Preview {
        host: PreviewHost {
            hidden: Cell::new(cli.start_hidden),
            focused: Cell::new(None),
            config: cli.config_file(),
        },
        module: RefCell::new(module),
        windows: RefCell::new(HashMap::new()),
        last_activity: Cell::new(Instant::now()),
    });

    preview.module.borrow_mut().on_activation(&preview.host, 0);

    for index in 0..cli.windows.max(1) {
        let id = WindowId(u64::from(index));
        let window = build_window(app, &preview, id);
        window.present();
    }

    if cli.idle_timeout > 0 {
        let timeout = Duration::from_secs(cli.idle_timeout);
        let preview = Rc::downgrade(&preview);
        glib::timeout_add_seconds_local(1, move || match preview.upgrade() {
            Some(preview) => {
                preview.check_idle(timeout);
                glib::ControlFlow::Continue
            }
            None => glib::ControlFlow::Break,
        });
    } else {
        debug!("Idle timeout disabled, UI stays visible");
    }
}

fn build_window(app: &Application, preview: &Rc<Preview>, id: WindowId) -> ApplicationWindow {
    let background = Label::new(Some("Locked"));
    background.add_css_class("title-1");

    let overlay = Overlay::new();
    overlay.set_child(Some(&background));

    let window = ApplicationWindow::builder()
        .application(app)
        .title(format!("powerbar preview ({})", id))
        .default_width(640)
        .default_height(400)
        .child(&overlay)
        .build();

    preview
        .windows
        .borrow_mut()
        .insert(id, LockWindow::new(id, overlay));

    let weak = Rc::downgrade(preview);
    window.connect_is_active_notify(move |window| {
        if let (true, Some(preview)) = (window.is_active(), weak.upgrade()) {
            preview.focus(id);
        }
    });

    let weak = Rc::downgrade(preview);
    window.connect_close_request(move |_| {
        if let Some(preview) = weak.upgrade() {
            preview.close(id);
        }
        glib::Propagation::Proceed
    });

    let motion = EventControllerMotion::new();
    let weak = Rc::downgrade(preview);
    motion.connect_motion(move |_, _, _| {
        if let Some(preview) = weak.upgrade() {
            preview.activity();
        }
    });
    window.add_controller(motion);

    let keys = EventControllerKey::new();
    let weak = Rc::downgrade(preview);
    keys.connect_key_pressed(move |_, _, _, _| {
        if let Some(preview) = weak.upgrade() {
            preview.activity();
        }
        glib::Propagation::Proceed
    });
    window.add_controller(keys);

    window
}
