use app_shell::ShellState;
use leptos::*;

#[derive(Clone)]
pub struct ShellCtx {
    pub shell: RwSignal<ShellState>,
}

pub fn provide_shell_ctx() -> ShellCtx {
    let ctx = ShellCtx {
        shell: create_rw_signal(ShellState::default()),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_shell_ctx() -> ShellCtx {
    use_context::<ShellCtx>().expect("ShellCtx not provided")
}
