pub mod categorias;
pub mod health;
pub mod mensajes;
pub mod perfiles;
pub mod tareas;
