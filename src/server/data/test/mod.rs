mod cart;
mod category;
mod food;
mod revoked_token;
