pub mod request_common;

pub mod assumir_ordem_patch;
pub mod create_ordem_post;
pub mod create_usuario_post;
pub mod dashboard_get;
pub mod delete_ordem_delete;
pub mod delete_usuario_delete;
pub mod finalizar_ordem_foto_patch;
pub mod finalizar_ordem_patch;
pub mod login_post;
pub mod me_get;
pub mod ordem_get;
pub mod ordens_list_get;
pub mod update_ordem_patch;
pub mod update_usuario_patch;
pub mod usuarios_get;
