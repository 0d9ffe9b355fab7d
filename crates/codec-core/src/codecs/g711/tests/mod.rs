//! G.711 Test Modules
