mod account_test;
mod category_test;
mod moderation_test;
mod router_test;
mod seed_test;
mod wallet_test;
