mod test_auth;
