//! User-facing status strings. The event is run in Spanish, so every message
//! shown to registrants and admins is too.

pub const VALIDATION_REQUIRED: &str = "Por favor, completa tu Nombre y Email.";
pub const REGISTRATION_SUCCESS: &str =
    "¡Registro exitoso! Revisa tu correo para los detalles del evento.";
pub const REGISTRATION_FALLBACK_ERROR: &str =
    "Error al procesar el registro. Inténtalo de nuevo.";
pub const CONNECTION_FAILED: &str = "Error al conectar con el servidor.";

pub const SENDING: &str = "Enviando...";
pub const SUBMIT_LABEL: &str = "QUIERO MI ACCESO GRATUITO";
pub const SUBMIT_LABEL_LOADING: &str = "Registrando...";

pub const CLOSED_TITLE: &str = "¡Lo sentimos!";
pub const CLOSED_BODY: &str =
    "El tiempo de registro ha expirado. Por favor, intenta refrescar la página.";

pub const ADMIN_EMPTY_KEY: &str = "Por favor, ingresa una clave.";
pub const ADMIN_UNAUTHORIZED: &str = "Clave incorrecta o no autorizada.";
pub const ADMIN_NOT_LOGGED_IN: &str =
    "No hay una sesión activa. Ejecuta `summit admin login --key <clave>`.";
