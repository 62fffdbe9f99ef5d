mod activate_user;
mod archive_user;
mod get_user_profile;
mod update_user_profile;
