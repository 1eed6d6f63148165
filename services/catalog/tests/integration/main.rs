mod create_listing_test;
mod search_listings_test;
